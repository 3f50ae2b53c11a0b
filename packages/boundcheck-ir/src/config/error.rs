//! Configuration error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML file without a `version` key
    #[error("Config file has no 'version' key; start it with 'version: 1'")]
    MissingVersion,

    #[error("Config schema version {found} is not supported (supported: {})", join(supported))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    #[error("Unknown preset '{0}' (expected silent, trace, debug or custom)")]
    UnknownPreset(String),

    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Field value rejected by `validate()`
    #[error("Invalid config: {0}")]
    Validation(String),
}

fn join(versions: &[u32]) -> String {
    versions
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_messages() {
        let err = ConfigError::UnsupportedVersion {
            found: 3,
            supported: vec![1, 2],
        };
        assert_eq!(
            err.to_string(),
            "Config schema version 3 is not supported (supported: 1, 2)"
        );
        assert!(ConfigError::MissingVersion.to_string().contains("version: 1"));
    }

    #[test]
    fn test_unknown_preset_lists_choices() {
        let msg = ConfigError::UnknownPreset("paranoid".to_string()).to_string();
        assert!(msg.contains("'paranoid'"));
        assert!(msg.contains("silent, trace, debug"));
    }
}
