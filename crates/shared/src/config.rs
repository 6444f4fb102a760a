//! Configuration types for the address book

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::AddressBookError;

/// Narrowest card the renderer will wrap to
pub const MIN_CARD_WIDTH: usize = 20;

/// Application configuration (config.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBookConfig {
    /// Maximum width, in columns, of a rendered person card label
    #[serde(default = "default_card_width")]
    pub card_width: usize,

    /// Fallback tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seed the interactive session with typical contacts
    #[serde(default = "default_load_sample_data")]
    pub load_sample_data: bool,
}

fn default_card_width() -> usize {
    60
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_load_sample_data() -> bool {
    true
}

impl Default for AddressBookConfig {
    fn default() -> Self {
        Self {
            card_width: default_card_width(),
            log_level: default_log_level(),
            load_sample_data: default_load_sample_data(),
        }
    }
}

impl AddressBookConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> crate::Result<()> {
        if self.card_width < MIN_CARD_WIDTH {
            return Err(AddressBookError::Config(format!(
                "cardWidth must be at least {}, got {}",
                MIN_CARD_WIDTH, self.card_width
            )));
        }
        if self.log_level.trim().is_empty() {
            return Err(AddressBookError::Config(
                "logLevel must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "cardWidth": 80,
            "logLevel": "debug",
            "loadSampleData": false
        }"#;

        let config: AddressBookConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.card_width, 80);
        assert_eq!(config.log_level, "debug");
        assert!(!config.load_sample_data);
    }

    #[test]
    fn test_config_defaults_for_missing_keys() {
        let config: AddressBookConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AddressBookConfig::default());
    }

    #[test]
    fn test_validate_rejects_narrow_card() {
        let config = AddressBookConfig {
            card_width: 5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AddressBookError::Config(_))
        ));
    }

    #[test]
    fn test_from_file_round_trip() {
        let config = AddressBookConfig {
            card_width: 42,
            ..Default::default()
        };

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let loaded = AddressBookConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AddressBookConfig::from_file(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(AddressBookError::Io(_))));
    }

    #[test]
    fn test_from_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let result = AddressBookConfig::from_file(file.path());
        assert!(matches!(result, Err(AddressBookError::Json(_))));
    }
}
