//! Feasibility queries against the abstract domain
//!
//! Every query meets a private copy of the invariant with a hypothesis and
//! tests the result for bottom. The caller's invariant is never touched.

use crate::shared::models::{LinearConstraint, LinearExpression, VarName};

use super::super::ports::AbstractInvariant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundsOracle;

impl BoundsOracle {
    pub fn new() -> Self {
        Self
    }

    /// `invariant ∧ offset >= size` is bottom
    pub fn proven_in_bounds_always<I: AbstractInvariant>(
        &self,
        invariant: &I,
        offset: &LinearExpression,
        size: &VarName,
    ) -> bool {
        let past_end = LinearConstraint::ge(offset.clone(), LinearExpression::var(size.clone()));
        invariant.constrain(&past_end).is_bottom()
    }

    /// `invariant ∧ 0 <= offset ∧ offset <= size - 1` is bottom
    pub fn proven_out_of_bounds_always<I: AbstractInvariant>(
        &self,
        invariant: &I,
        offset: &LinearExpression,
        size: &VarName,
    ) -> bool {
        let within = [
            LinearConstraint::ge(offset.clone(), LinearExpression::constant(0)),
            LinearConstraint::le(offset.clone(), LinearExpression::var(size.clone()) - 1),
        ];
        invariant.constrain_all(&within).is_bottom()
    }

    /// `invariant ∧ offset <= -1` is satisfiable
    pub fn may_underflow<I: AbstractInvariant>(&self, invariant: &I, offset: &LinearExpression) -> bool {
        let negative = LinearConstraint::le(offset.clone(), LinearExpression::constant(-1));
        !invariant.constrain(&negative).is_bottom()
    }

    /// `invariant ∧ offset >= 0` is satisfiable
    pub fn may_stay_non_negative<I: AbstractInvariant>(
        &self,
        invariant: &I,
        offset: &LinearExpression,
    ) -> bool {
        let non_negative = LinearConstraint::ge(offset.clone(), LinearExpression::constant(0));
        !invariant.constrain(&non_negative).is_bottom()
    }
}
