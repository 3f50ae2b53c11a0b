//! Bounds Check Ports - Interface Layer (Hexagonal Architecture)
//!
//! Contracts consumed from collaborators the checker never implements:
//!
//! - `AbstractInvariant`: the numeric abstract domain (bottom test + pure
//!   constraint application)
//! - `AddressDomain`: points-to facts carried by the invariant
//! - `ShadowSizes`: naming of the size variable tracked per allocation
//!
//! and the driving port the fixpoint driver calls:
//!
//! - `Checker`: one `check` per reachable instruction per calling context

use std::fmt;

use boundcheck_storage::ResultSink;

use crate::errors::Result;
use crate::shared::models::{Instruction, LinearConstraint, VarName};

use super::domain::CheckOutcome;

// ═══════════════════════════════════════════════════════════════════════════
// Secondary Ports (Driven)
// ═══════════════════════════════════════════════════════════════════════════

/// Abstract invariant at a program point
///
/// `constrain` must be pure: the receiver is never modified and every call
/// yields an independent value. `Display` is used by the invariant dump hook.
pub trait AbstractInvariant: Clone + fmt::Display {
    fn is_bottom(&self) -> bool;

    /// Meet with `constraint`
    fn constrain(&self, constraint: &LinearConstraint) -> Self;

    /// Meet with every constraint, left to right
    fn constrain_all(&self, constraints: &[LinearConstraint]) -> Self {
        constraints
            .iter()
            .fold(self.clone(), |inv, constraint| inv.constrain(constraint))
    }
}

/// Points-to answer for one pointer variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointsTo {
    /// May point anywhere, or precision was lost
    Unknown,
    /// Address variables the pointer may alias
    Addresses(Vec<VarName>),
}

/// Points-to facts of an invariant
pub trait AddressDomain {
    fn points_to(&self, pointer: &VarName) -> PointsTo;
}

/// Shadow size variable of an allocation
pub trait ShadowSizes {
    fn shadow_size(&self, address: &VarName) -> VarName;
}

// ═══════════════════════════════════════════════════════════════════════════
// Primary Port (Driving)
// ═══════════════════════════════════════════════════════════════════════════

/// A checker the fixpoint driver invokes per instruction
pub trait Checker<I, O> {
    /// Short name used as the results key
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check one instruction under `invariant` in `call_context`, writing
    /// the resulting records to `sink`
    fn check(
        &self,
        instruction: &Instruction<O>,
        invariant: &I,
        call_context: &str,
        sink: &mut dyn ResultSink,
    ) -> Result<CheckOutcome>;
}
