use self::batch::BatchConfig;
use self::service::ServiceConfig;

pub mod batch;
pub mod service;

pub use service::ConfigError;

pub struct Config {
    pub service: ServiceConfig,
    pub batch: BatchConfig,
}

impl Config {
    /// Resolve the full configuration from the process environment.
    ///
    /// Credentials are required and checked fail-fast; batch settings fall
    /// back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            service: ServiceConfig::from_env()?,
            batch: BatchConfig::from_env(),
        })
    }
}
