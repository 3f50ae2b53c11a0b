//! Bounds checker configuration

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;

/// Prefix of the shadow variable holding an allocation's size
pub const DEFAULT_SHADOW_SIZE_PREFIX: &str = "shadow.size.";

fn default_shadow_size_prefix() -> String {
    DEFAULT_SHADOW_SIZE_PREFIX.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsCheckConfig {
    /// Log `(context, line, column)` for every checked access
    #[serde(default)]
    pub trace_checks: bool,

    /// Log the full invariant whenever a warning or error is produced
    #[serde(default)]
    pub dump_invariants: bool,

    /// Shadow size variable of address `a` is `<prefix>a`
    #[serde(default = "default_shadow_size_prefix")]
    pub shadow_size_prefix: String,
}

impl BoundsCheckConfig {
    pub fn from_preset(preset: Preset) -> Self {
        let (trace_checks, dump_invariants) = match preset {
            Preset::Silent | Preset::Custom => (false, false),
            Preset::Trace => (true, false),
            Preset::Debug => (true, true),
        };

        Self {
            trace_checks,
            dump_invariants,
            shadow_size_prefix: default_shadow_size_prefix(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.shadow_size_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "shadow_size_prefix must not be empty".to_string(),
            ));
        }

        if self.shadow_size_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "shadow_size_prefix '{}' must not contain whitespace",
                self.shadow_size_prefix
            )));
        }

        Ok(())
    }

    /// Builder: Set trace_checks
    pub fn trace_checks(mut self, v: bool) -> Self {
        self.trace_checks = v;
        self
    }

    /// Builder: Set dump_invariants
    pub fn dump_invariants(mut self, v: bool) -> Self {
        self.dump_invariants = v;
        self
    }

    /// Builder: Set shadow_size_prefix
    pub fn shadow_size_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.shadow_size_prefix = prefix.into();
        self
    }
}

impl Default for BoundsCheckConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Silent)
    }
}
