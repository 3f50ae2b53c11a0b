//! Preset configurations
//!
//! Presets decide which observability hooks the checker runs. Verdicts are
//! identical under every preset.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Configuration preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Production runs: no hooks
    #[default]
    Silent,

    /// Emit `(context, line, column)` for every checked access
    Trace,

    /// Trace + dump the invariant on every warning or error
    Debug,

    /// User-defined (YAML only); starts from Silent defaults
    Custom,
}

impl Preset {
    /// Case-insensitive preset name
    pub fn from_str(name: &str) -> ConfigResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "custom" => Ok(Self::Custom),
            _ => Err(ConfigError::UnknownPreset(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
