//! Bounds Check - buffer overflow / underflow verdicts (Hexagonal Architecture)
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Application     AccessChecker (Checker port, record policy)  │
//! │                      │                                       │
//! │ Infrastructure  PointerResolver ─ BoundsOracle ─ ShadowSize  │
//! │                      │                                       │
//! │ Ports           AbstractInvariant, AddressDomain,            │
//! │                 ShadowSizes, Checker                         │
//! │                      │                                       │
//! │ Domain          AllocationCandidate, CandidateSet,           │
//! │                 PointerResolution, CheckOutcome, Verdict     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The numeric domain and the points-to analysis are supplied by the host
//! analyzer through the ports; this feature never implements them.
//!
//! ## Example
//! ```rust,ignore
//! use boundcheck_ir::features::bounds_check::{AccessChecker, Checker};
//! use boundcheck_storage::MemoryResultSink;
//!
//! let checker = AccessChecker::new(BoundsCheckConfig::from_preset(Preset::Trace))?;
//! let mut sink = MemoryResultSink::new();
//! let outcome = checker.check(&instruction, &invariant, "main", &mut sink)?;
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{AccessChecker, CHECKER_DESCRIPTION, CHECKER_NAME};
pub use domain::{
    classify_overflow, classify_underflow, AllocationCandidate, CandidateSet, CheckKind,
    CheckOutcome, CheckRecord, PointerResolution, Verdict,
};
pub use infrastructure::{BoundsOracle, PointerResolver, ShadowSizeNaming};
pub use ports::{AbstractInvariant, AddressDomain, Checker, PointsTo, ShadowSizes};
