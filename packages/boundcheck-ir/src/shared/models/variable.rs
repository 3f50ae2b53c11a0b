//! Variable identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a program variable or of a synthetic (shadow) variable
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarName(String);

impl VarName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VarName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for VarName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for VarName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
