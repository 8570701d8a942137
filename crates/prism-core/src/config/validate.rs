//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.batch_extensions.is_empty() {
            return Err(ConfigError::ValidationError(
                "processing.batch_extensions must not be empty".into(),
            ));
        }
        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if self.output.dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "output.dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let mut config = Config::default();
        config.processing.batch_extensions.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("batch_extensions"));
    }

    #[test]
    fn test_validate_rejects_zero_max_dimension() {
        let mut config = Config::default();
        config.limits.max_image_dimension = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_image_dimension"));
    }

    #[test]
    fn test_validate_rejects_empty_output_dir() {
        let mut config = Config::default();
        config.output.dir = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("output.dir"));
    }
}
