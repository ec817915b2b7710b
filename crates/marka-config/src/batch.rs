use std::env;
use std::path::PathBuf;

fn default_source_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output_images")
}

/// Settings for one batch run over the images folder.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Abort the whole batch on the first per-image failure instead of
    /// logging it and continuing.
    pub fail_fast: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            fail_fast: false,
        }
    }
}

impl BatchConfig {
    pub fn from_env() -> Self {
        let source_dir = env::var("MARKA_IMAGES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_source_dir());

        let output_dir = env::var("MARKA_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_output_dir());

        let fail_fast = env::var("MARKA_FAIL_FAST")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            source_dir,
            output_dir,
            fail_fast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_folder_layout() {
        let config = BatchConfig::default();
        assert_eq!(config.source_dir, PathBuf::from("images"));
        assert_eq!(config.output_dir, PathBuf::from("output_images"));
        assert!(!config.fail_fast);
    }
}
