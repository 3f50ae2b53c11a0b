//! Access Checker - per-instruction bounds verdicts
//!
//! Entry point the fixpoint driver calls once per reachable memory access
//! and calling context. Pointers are resolved to allocation candidates, the
//! oracle is queried per candidate, and one record per check kind is written
//! through the sink.
//!
//! ## Overflow
//! ```text
//! bottom                      → unreachable
//! unknown target              → warning
//! all candidates invalid      → error
//! some candidate not valid    → warning
//! otherwise                   → ok
//! ```
//!
//! ## Underflow
//! ```text
//! bottom                      → unreachable
//! unknown target              → warning
//! offset <= -1 infeasible     → ok
//! offset >= 0 infeasible      → error
//! otherwise                   → warning
//! ```

use tracing::{debug, error, warn};

use boundcheck_storage::ResultSink;

use crate::config::BoundsCheckConfig;
use crate::errors::{CheckerError, Result};
use crate::shared::models::{
    Instruction, LinearExpression, Literal, OperandModel, ReferenceKind, SourceLocation, VarName,
};

use super::super::domain::{
    classify_overflow, classify_underflow, CheckKind, CheckOutcome, CheckRecord,
    PointerResolution, Verdict,
};
use super::super::infrastructure::{BoundsOracle, PointerResolver, ShadowSizeNaming};
use super::super::ports::{AbstractInvariant, AddressDomain, Checker, ShadowSizes};

pub const CHECKER_NAME: &str = "boa";
pub const CHECKER_DESCRIPTION: &str = "Buffer overflow checker";

/// Buffer overflow / underflow checker
///
/// Stateless between calls: everything it needs arrives as arguments, and
/// the invariant it is handed is only ever read.
#[derive(Debug, Clone)]
pub struct AccessChecker<S = ShadowSizeNaming> {
    config: BoundsCheckConfig,
    resolver: PointerResolver<S>,
    oracle: BoundsOracle,
}

impl AccessChecker<ShadowSizeNaming> {
    /// Checker whose shadow sizes follow `config.shadow_size_prefix`
    pub fn new(config: BoundsCheckConfig) -> Result<Self> {
        config.validate()?;
        let naming = ShadowSizeNaming::from_config(&config);
        Ok(Self::with_shadow_sizes(config, naming))
    }
}

impl Default for AccessChecker<ShadowSizeNaming> {
    fn default() -> Self {
        Self::with_shadow_sizes(BoundsCheckConfig::default(), ShadowSizeNaming::default())
    }
}

impl<S: ShadowSizes> AccessChecker<S> {
    /// Checker with a caller-supplied shadow size collaborator
    ///
    /// `config.shadow_size_prefix` is ignored here.
    pub fn with_shadow_sizes(config: BoundsCheckConfig, shadow_sizes: S) -> Self {
        Self {
            config,
            resolver: PointerResolver::new(shadow_sizes),
            oracle: BoundsOracle::new(),
        }
    }

    pub fn config(&self) -> &BoundsCheckConfig {
        &self.config
    }

    pub fn resolver(&self) -> &PointerResolver<S> {
        &self.resolver
    }

    /// Overflow verdict for `offset` relative to the objects `pointer` may
    /// reference
    pub fn check_overflow<I>(&self, pointer: &VarName, offset: &LinearExpression, invariant: &I) -> Verdict
    where
        I: AbstractInvariant + AddressDomain,
    {
        if invariant.is_bottom() {
            return Verdict::Unreachable;
        }

        let candidates = match self.resolver.resolve(invariant, pointer) {
            PointerResolution::Unknown => return Verdict::Warning,
            PointerResolution::Candidates(set) => set,
        };

        let all_valid = candidates
            .iter()
            .all(|c| self.oracle.proven_in_bounds_always(invariant, offset, &c.size));
        let all_invalid = candidates
            .iter()
            .all(|c| self.oracle.proven_out_of_bounds_always(invariant, offset, &c.size));

        classify_overflow(all_valid, all_invalid)
    }

    /// Underflow verdict for `offset`; the target's size plays no part
    pub fn check_underflow<I>(&self, pointer: &VarName, offset: &LinearExpression, invariant: &I) -> Verdict
    where
        I: AbstractInvariant + AddressDomain,
    {
        if invariant.is_bottom() {
            return Verdict::Unreachable;
        }

        if self.resolver.resolve(invariant, pointer).is_unknown() {
            return Verdict::Warning;
        }

        let may_be_negative = self.oracle.may_underflow(invariant, offset);
        let may_be_non_negative =
            may_be_negative && self.oracle.may_stay_non_negative(invariant, offset);
        classify_underflow(may_be_negative, may_be_non_negative)
    }

    /// Dispatch one instruction and write its records to `sink`
    pub fn check_instruction<I, O>(
        &self,
        instruction: &Instruction<O>,
        invariant: &I,
        call_context: &str,
        sink: &mut dyn ResultSink,
    ) -> Result<CheckOutcome>
    where
        I: AbstractInvariant + AddressDomain,
        O: OperandModel,
    {
        let location = instruction.location();

        match instruction {
            Instruction::Load { pointer, .. } | Instruction::Store { pointer, .. } => {
                self.check_access(pointer, invariant, call_context, location, sink)
            }
            Instruction::MemCopy {
                destination,
                source,
                length,
                ..
            }
            | Instruction::MemMove {
                destination,
                source,
                length,
                ..
            } => {
                let operands = [destination.literal(), source.literal()];
                self.check_block(&operands, &length.literal(), invariant, call_context, location, sink)
            }
            Instruction::MemSet {
                destination, length, ..
            } => {
                let operands = [destination.literal()];
                self.check_block(&operands, &length.literal(), invariant, call_context, location, sink)
            }
        }
    }

    /// Load / store through a single pointer operand
    fn check_access<I, O>(
        &self,
        pointer: &O,
        invariant: &I,
        call_context: &str,
        location: SourceLocation,
        sink: &mut dyn ResultSink,
    ) -> Result<CheckOutcome>
    where
        I: AbstractInvariant + AddressDomain,
        O: OperandModel,
    {
        // Direct globals and address-taken locals are always in bounds
        if pointer.reference_kind() != ReferenceKind::Indirect {
            return Ok(CheckOutcome::Skipped);
        }

        let var = match pointer.literal() {
            Literal::Var(var) => var,
            other => {
                let err = CheckerError::precondition(
                    format!("{:?}", pointer),
                    location.line,
                    location.column,
                    format!("resolves to {} instead of a variable", other),
                );
                error!(context = call_context, %location, error = %err, "bounds check aborted");
                return Err(err);
            }
        };

        self.trace_access(call_context, location);

        let offset = LinearExpression::var(var.clone());
        let overflow = self.check_overflow(&var, &offset, invariant);
        let underflow = self.check_underflow(&var, &offset, invariant);

        self.dump_invariant(invariant, location, &[overflow, underflow]);
        self.emit(sink, call_context, location, overflow, Some(underflow))
    }

    /// Block copy, move or fill over one or two pointer operands
    ///
    /// Each pointer is checked with overflow offset `ptr + length - 1` and
    /// underflow offset `ptr`; verdicts of the same kind across pointers are
    /// merged into one record.
    fn check_block<I>(
        &self,
        pointers: &[Literal],
        length: &Literal,
        invariant: &I,
        call_context: &str,
        location: SourceLocation,
        sink: &mut dyn ResultSink,
    ) -> Result<CheckOutcome>
    where
        I: AbstractInvariant + AddressDomain,
    {
        let vars: Option<Vec<&VarName>> = pointers.iter().map(Literal::as_var).collect();
        let length = match length {
            Literal::Var(var) => Some(LinearExpression::var(var.clone())),
            Literal::Num(n) => Some(LinearExpression::constant(*n)),
            Literal::Unresolved => None,
        };

        let (vars, length) = match (vars, length) {
            (Some(vars), Some(length)) => (vars, length),
            _ => {
                warn!(
                    context = call_context,
                    %location,
                    "block intrinsic operands do not resolve, reporting overflow warning"
                );
                return self.emit(sink, call_context, location, Verdict::Warning, None);
            }
        };

        // Both endpoints share the invariant, so they are either both
        // unreachable or neither is; the fold starts from the bottom rank.
        let (overflow, underflow) = vars.into_iter().fold(
            (Verdict::Unreachable, Verdict::Unreachable),
            |(overflow, underflow), var| {
                let end = LinearExpression::var(var.clone()) + length.clone() - 1;
                let start = LinearExpression::var(var.clone());
                (
                    overflow.most_severe(self.check_overflow(var, &end, invariant)),
                    underflow.most_severe(self.check_underflow(var, &start, invariant)),
                )
            },
        );

        self.trace_access(call_context, location);
        self.dump_invariant(invariant, location, &[overflow, underflow]);
        self.emit(sink, call_context, location, overflow, Some(underflow))
    }

    fn emit(
        &self,
        sink: &mut dyn ResultSink,
        call_context: &str,
        location: SourceLocation,
        overflow: Verdict,
        underflow: Option<Verdict>,
    ) -> Result<CheckOutcome> {
        let mut records = Vec::with_capacity(2);
        records.push(CheckRecord::new(
            CheckKind::Overflow,
            call_context,
            location.line,
            location.column,
            overflow,
        ));
        if let Some(verdict) = underflow {
            records.push(CheckRecord::new(
                CheckKind::Underflow,
                call_context,
                location.line,
                location.column,
                verdict,
            ));
        }

        for record in &records {
            sink.write(record)?;
        }
        Ok(CheckOutcome::Recorded(records))
    }

    fn trace_access(&self, call_context: &str, location: SourceLocation) {
        if self.config.trace_checks {
            debug!(
                context = call_context,
                line = location.line,
                column = location.column,
                "checking access"
            );
        }
    }

    fn dump_invariant<I: AbstractInvariant>(&self, invariant: &I, location: SourceLocation, verdicts: &[Verdict]) {
        if self.config.dump_invariants && verdicts.iter().any(|v| v.is_finding()) {
            debug!(%location, invariant = %invariant, "invariant at finding");
        }
    }
}

impl<I, O, S> Checker<I, O> for AccessChecker<S>
where
    I: AbstractInvariant + AddressDomain,
    O: OperandModel,
    S: ShadowSizes,
{
    fn name(&self) -> &'static str {
        CHECKER_NAME
    }

    fn description(&self) -> &'static str {
        CHECKER_DESCRIPTION
    }

    fn check(
        &self,
        instruction: &Instruction<O>,
        invariant: &I,
        call_context: &str,
        sink: &mut dyn ResultSink,
    ) -> Result<CheckOutcome> {
        self.check_instruction(instruction, invariant, call_context, sink)
    }
}
