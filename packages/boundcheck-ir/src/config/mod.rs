//! Checker configuration
//!
//! Three tiers, from least to most control:
//! - Level 1: Preset - one-liner
//! - Level 2: Builder overrides on top of a preset
//! - Level 3: YAML file (schema v1)
//!
//! # Examples
//!
//! ```rust,ignore
//! use boundcheck_ir::config::{BoundsCheckConfig, Preset};
//!
//! // Level 1
//! let config = BoundsCheckConfig::from_preset(Preset::Silent);
//!
//! // Level 2
//! let config = BoundsCheckConfig::from_preset(Preset::Trace).dump_invariants(true);
//!
//! // Level 3
//! let config = BoundsCheckConfig::from_yaml("boundcheck.yaml")?;
//! ```

pub mod checker_config;
pub mod error;
pub mod io;
pub mod preset;

pub use checker_config::{BoundsCheckConfig, DEFAULT_SHADOW_SIZE_PREFIX};
pub use error::{ConfigError, ConfigResult};
pub use io::{BoundsCheckConfigPatch, ConfigFileV1};
pub use preset::Preset;
