/*
 * Boundcheck IR - Buffer bounds verdicts for an abstract interpreter
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (VarName, LinearExpression, Instruction)
 * - features/    : Vertical slices (bounds_check)
 * - config/      : Preset → builder → YAML configuration
 * - errors       : CheckerError + Result alias
 *
 * The numeric domain, points-to analysis and fixpoint driver belong to the
 * host analyzer and plug in through the bounds_check ports.
 */

#![allow(clippy::should_implement_trait)] // from_str naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration (presets, builder, YAML)
pub mod config;

/// Error types
pub mod errors;

/// Feature modules
pub mod features;

/// Shared models
pub mod shared;

pub use config::{BoundsCheckConfig, ConfigError, Preset};
pub use errors::{CheckerError, Result};
pub use features::bounds_check::{
    AbstractInvariant, AccessChecker, AddressDomain, AllocationCandidate, BoundsOracle,
    CandidateSet, CheckOutcome, Checker, PointerResolution, PointerResolver, PointsTo,
    ShadowSizeNaming, ShadowSizes,
};
pub use shared::models::{
    Instruction, LinearConstraint, LinearExpression, Literal, Operand, OperandModel,
    ReferenceKind, SourceLocation, VarName,
};

pub use boundcheck_storage::{CheckKind, CheckRecord, ResultSink, ResultSummary, Verdict};
