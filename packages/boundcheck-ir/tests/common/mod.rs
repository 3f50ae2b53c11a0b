//! Common test utilities for boundcheck-ir
//!
//! Shared invariant fixtures, instruction builders and record assertions
//! for the integration tests.

#![allow(dead_code)]

mod assertions;
mod builders;
mod fixtures;

// Re-export all utilities
pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
