//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory for user data
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_dir_is_data() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn default_config_validates() {
        assert!(StorageConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_data_dir_fails_validation() {
        let config = StorageConfig {
            data_dir: PathBuf::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyDataDir)
        ));
    }
}
