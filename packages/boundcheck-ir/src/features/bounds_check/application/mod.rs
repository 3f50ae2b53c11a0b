//! Bounds Check Application Layer
//!
//! `AccessChecker` orchestrates the resolver and the oracle per instruction
//! and owns the record-writing policy.

pub mod access_checker;

pub use access_checker::{AccessChecker, CHECKER_DESCRIPTION, CHECKER_NAME};
