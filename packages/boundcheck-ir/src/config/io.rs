//! Configuration I/O (YAML loading)
//!
//! ```yaml
//! version: 1
//! preset: trace
//! overrides:
//!   dump_invariants: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::checker_config::BoundsCheckConfig;
use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset
    pub preset: String,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<BoundsCheckConfigPatch>,
}

/// Partial override applied on top of a preset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsCheckConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_checks: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dump_invariants: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_size_prefix: Option<String>,
}

impl BoundsCheckConfigPatch {
    pub fn apply(self, mut config: BoundsCheckConfig) -> BoundsCheckConfig {
        if let Some(v) = self.trace_checks {
            config.trace_checks = v;
        }
        if let Some(v) = self.dump_invariants {
            config.dump_invariants = v;
        }
        if let Some(prefix) = self.shadow_size_prefix {
            config.shadow_size_prefix = prefix;
        }
        config
    }
}

impl BoundsCheckConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&file.preset)?;

        let base = Self::from_preset(preset);
        let config = match file.overrides {
            Some(patch) => patch.apply(base),
            None => base,
        };

        config.validate()?;
        Ok(config)
    }

    /// Export as a self-contained YAML v1 document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            preset: Preset::Custom.to_string(),
            overrides: Some(BoundsCheckConfigPatch {
                trace_checks: Some(self.trace_checks),
                dump_invariants: Some(self.dump_invariants),
                shadow_size_prefix: Some(self.shadow_size_prefix.clone()),
            }),
        };

        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_roundtrip() {
        let config = BoundsCheckConfig::from_preset(Preset::Trace).shadow_size_prefix("sz.");

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("preset: custom"));

        let reloaded = BoundsCheckConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
preset: trace
overrides:
  dump_invariants: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = BoundsCheckConfig::from_yaml(temp_file.path()).unwrap();
        assert!(config.trace_checks);
        assert!(config.dump_invariants);
        assert_eq!(config.shadow_size_prefix, "shadow.size.");
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = BoundsCheckConfig::from_yaml_str("preset: silent\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = BoundsCheckConfig::from_yaml_str("version: 2\npreset: silent\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_unknown_preset() {
        let result = BoundsCheckConfig::from_yaml_str("version: 1\npreset: loud\n");
        assert!(matches!(result, Err(ConfigError::UnknownPreset(p)) if p == "loud"));
    }

    #[test]
    fn test_yaml_unknown_override_field() {
        let yaml = "version: 1\npreset: silent\noverrides:\n  trace_check: true\n";
        assert!(matches!(
            BoundsCheckConfig::from_yaml_str(yaml),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_yaml_invalid_override_value() {
        let yaml = "version: 1\npreset: silent\noverrides:\n  shadow_size_prefix: \"\"\n";
        assert!(matches!(
            BoundsCheckConfig::from_yaml_str(yaml),
            Err(ConfigError::Validation(_))
        ));
    }
}
