use std::env;

pub const ENDPOINT_VAR: &str = "AI_SERVICE_ENDPOINT";
pub const KEY_VAR: &str = "AI_SERVICE_KEY";

/// Credentials for the remote image-analysis service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("environment variable {0} is set but empty")]
    EmptyVar(&'static str),
}

impl ServiceConfig {
    /// Read endpoint and key from the environment. Both are required; this
    /// is a startup-time check with no defaults and no retries.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var(ENDPOINT_VAR).ok(), env::var(KEY_VAR).ok())
    }

    fn from_values(
        endpoint: Option<String>,
        key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint = require(endpoint, ENDPOINT_VAR)?;
        let key = require(key, KEY_VAR)?;

        Ok(ServiceConfig { endpoint, key })
    }
}

fn require(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    match value {
        None => Err(ConfigError::MissingVar(name)),
        Some(v) if v.trim().is_empty() => Err(ConfigError::EmptyVar(name)),
        Some(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_values_present() {
        let config = ServiceConfig::from_values(
            Some("https://example.cognitiveservices.azure.com".into()),
            Some("secret".into()),
        )
        .unwrap();

        assert_eq!(config.endpoint, "https://example.cognitiveservices.azure.com");
        assert_eq!(config.key, "secret");
    }

    #[test]
    fn missing_key_fails_fast() {
        let err = ServiceConfig::from_values(Some("https://e".into()), None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(KEY_VAR)));
    }

    #[test]
    fn missing_endpoint_fails_fast() {
        let err = ServiceConfig::from_values(None, Some("secret".into())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ENDPOINT_VAR)));
    }

    #[test]
    fn empty_value_is_rejected() {
        let err =
            ServiceConfig::from_values(Some("https://e".into()), Some("   ".into())).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyVar(KEY_VAR)));
    }
}
