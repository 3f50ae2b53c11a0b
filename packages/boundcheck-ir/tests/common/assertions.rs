//! Record assertions

use boundcheck_ir::{CheckKind, CheckOutcome, CheckRecord, Verdict};
use pretty_assertions::assert_eq;

use super::builders::{COLUMN, LINE};

/// Record at the builders' fixed location
pub fn record(kind: CheckKind, context: &str, verdict: Verdict) -> CheckRecord {
    CheckRecord::new(kind, context, LINE, COLUMN, verdict)
}

/// Assert the exact overflow / underflow pair written for one access
pub fn assert_verdicts(outcome: &CheckOutcome, overflow: Verdict, underflow: Verdict) {
    assert_eq!(
        (outcome.overflow(), outcome.underflow()),
        (Some(overflow), Some(underflow)),
        "records: {:?}",
        outcome.records()
    );
    assert_eq!(outcome.records().len(), 2, "one record per kind");
}

/// Assert the unresolved block-intrinsic fallback: one overflow warning
pub fn assert_fallback_warning(outcome: &CheckOutcome) {
    assert_eq!(outcome.records().len(), 1, "records: {:?}", outcome.records());
    assert_eq!(outcome.overflow(), Some(Verdict::Warning));
    assert_eq!(outcome.underflow(), None);
}
