//! Prefix-based shadow size naming

use crate::config::{BoundsCheckConfig, DEFAULT_SHADOW_SIZE_PREFIX};
use crate::shared::models::VarName;

use super::super::ports::ShadowSizes;

/// Shadow size of address `a` is the variable `<prefix>a`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowSizeNaming {
    prefix: String,
}

impl ShadowSizeNaming {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &BoundsCheckConfig) -> Self {
        Self::new(config.shadow_size_prefix.clone())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for ShadowSizeNaming {
    fn default() -> Self {
        Self::new(DEFAULT_SHADOW_SIZE_PREFIX)
    }
}

impl ShadowSizes for ShadowSizeNaming {
    fn shadow_size(&self, address: &VarName) -> VarName {
        VarName::new(format!("{}{}", self.prefix, address))
    }
}
