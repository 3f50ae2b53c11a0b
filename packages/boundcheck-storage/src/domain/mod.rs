//! Domain layer for the bounds-check results database
//!
//! # Record Schema
//!
//! Every checked access is persisted as a five-field record:
//!
//! ```text
//! (kind, call_context, line, column, verdict)
//!   kind    ∈ { "overflow", "underflow" }
//!   verdict ∈ { "unreachable", "ok", "warning", "error" }
//! ```
//!
//! Field order and the tokens are consumed by downstream tooling and must not
//! change.
//!
//! # Port Trait
//!
//! - `ResultSink`: append-only recorder, implemented by the adapters in
//!   [`crate::infrastructure`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Result, StorageError};

// ═══════════════════════════════════════════════════════════════════════════
// Domain Models
// ═══════════════════════════════════════════════════════════════════════════

/// Which side of the object a check guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Access past the end of the allocation
    Overflow,
    /// Access before the start of the allocation
    Underflow,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Overflow => "overflow",
            CheckKind::Underflow => "underflow",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CheckKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "overflow" => Ok(CheckKind::Overflow),
            "underflow" => Ok(CheckKind::Underflow),
            other => Err(StorageError::unknown_token("check kind", other)),
        }
    }
}

/// Outcome of a single check
///
/// A reporting classification, not a lattice. `Unreachable` means the program
/// point is dead under the incoming invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Unreachable,
    Ok,
    Warning,
    Error,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Unreachable => "unreachable",
            Verdict::Ok => "ok",
            Verdict::Warning => "warning",
            Verdict::Error => "error",
        }
    }

    /// Rank used when several verdicts describe the same access
    pub fn severity(&self) -> u8 {
        match self {
            Verdict::Unreachable => 0,
            Verdict::Ok => 1,
            Verdict::Warning => 2,
            Verdict::Error => 3,
        }
    }

    /// The more severe of two verdicts
    pub fn most_severe(self, other: Verdict) -> Verdict {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }

    /// Warning or Error
    pub fn is_finding(&self) -> bool {
        matches!(self, Verdict::Warning | Verdict::Error)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unreachable" => Ok(Verdict::Unreachable),
            "ok" => Ok(Verdict::Ok),
            "warning" => Ok(Verdict::Warning),
            "error" => Ok(Verdict::Error),
            other => Err(StorageError::unknown_token("verdict", other)),
        }
    }
}

/// One persisted check result
///
/// Immutable once built; written exactly once per access and kind.
///
/// # Examples
///
/// ```rust
/// use boundcheck_storage::domain::{CheckKind, CheckRecord, Verdict};
///
/// let record = CheckRecord::new(CheckKind::Overflow, "main", 12, 5, Verdict::Ok);
/// assert_eq!(record.to_string(), "overflow|main|12|5|ok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckRecord {
    pub(crate) kind: CheckKind,
    pub(crate) call_context: String,
    pub(crate) line: u32,
    pub(crate) column: u32,
    pub(crate) verdict: Verdict,
}

impl CheckRecord {
    pub fn new(
        kind: CheckKind,
        call_context: impl Into<String>,
        line: u32,
        column: u32,
        verdict: Verdict,
    ) -> Self {
        Self {
            kind,
            call_context: call_context.into(),
            line,
            column,
            verdict,
        }
    }

    pub fn kind(&self) -> CheckKind {
        self.kind
    }

    pub fn call_context(&self) -> &str {
        &self.call_context
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

impl fmt::Display for CheckRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.kind, self.call_context, self.line, self.column, self.verdict
        )
    }
}

/// Verdict tallies for one check kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindSummary {
    pub unreachable: usize,
    pub ok: usize,
    pub warning: usize,
    pub error: usize,
}

impl KindSummary {
    pub fn count(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Unreachable => self.unreachable += 1,
            Verdict::Ok => self.ok += 1,
            Verdict::Warning => self.warning += 1,
            Verdict::Error => self.error += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.unreachable + self.ok + self.warning + self.error
    }
}

/// End-of-run report: verdict counts per check kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub overflow: KindSummary,
    pub underflow: KindSummary,
}

impl ResultSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a CheckRecord>) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.add(record);
        }
        summary
    }

    pub fn add(&mut self, record: &CheckRecord) {
        self.kind_mut(record.kind()).count(record.verdict());
    }

    pub fn kind(&self, kind: CheckKind) -> &KindSummary {
        match kind {
            CheckKind::Overflow => &self.overflow,
            CheckKind::Underflow => &self.underflow,
        }
    }

    fn kind_mut(&mut self, kind: CheckKind) -> &mut KindSummary {
        match kind {
            CheckKind::Overflow => &mut self.overflow,
            CheckKind::Underflow => &mut self.underflow,
        }
    }

    pub fn total(&self) -> usize {
        self.overflow.total() + self.underflow.total()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Port Trait
// ═══════════════════════════════════════════════════════════════════════════

/// Append-only recorder of check results
///
/// Implementations must keep the record field order and tokens intact. No
/// read-after-write consistency is required within a single check.
pub trait ResultSink {
    fn write(&mut self, record: &CheckRecord) -> Result<()>;

    /// Flush buffered records, if any
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn write(&mut self, record: &CheckRecord) -> Result<()> {
        (**self).write(record)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

impl<S: ResultSink + ?Sized> ResultSink for Box<S> {
    fn write(&mut self, record: &CheckRecord) -> Result<()> {
        (**self).write(record)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_match_schema() {
        assert_eq!(CheckKind::Overflow.as_str(), "overflow");
        assert_eq!(CheckKind::Underflow.as_str(), "underflow");
        assert_eq!(Verdict::Unreachable.as_str(), "unreachable");
        assert_eq!(Verdict::Ok.as_str(), "ok");
        assert_eq!(Verdict::Warning.as_str(), "warning");
        assert_eq!(Verdict::Error.as_str(), "error");
    }

    #[test]
    fn test_token_parsing() {
        assert_eq!("warning".parse::<Verdict>().unwrap(), Verdict::Warning);
        assert_eq!("underflow".parse::<CheckKind>().unwrap(), CheckKind::Underflow);
        assert!("WARNING".parse::<Verdict>().is_err());
        assert!("overrun".parse::<CheckKind>().is_err());
    }

    #[test]
    fn test_most_severe() {
        assert_eq!(Verdict::Ok.most_severe(Verdict::Error), Verdict::Error);
        assert_eq!(Verdict::Warning.most_severe(Verdict::Ok), Verdict::Warning);
        assert_eq!(Verdict::Error.most_severe(Verdict::Warning), Verdict::Error);
        assert_eq!(
            Verdict::Unreachable.most_severe(Verdict::Unreachable),
            Verdict::Unreachable
        );
    }

    #[test]
    fn test_record_accessors() {
        let record = CheckRecord::new(CheckKind::Overflow, "main/f", 30, 12, Verdict::Warning);
        assert_eq!(record.kind(), CheckKind::Overflow);
        assert_eq!(record.call_context(), "main/f");
        assert_eq!((record.line(), record.column()), (30, 12));
        assert_eq!(record.verdict(), Verdict::Warning);
    }

    #[test]
    fn test_record_json_field_order() {
        let record = CheckRecord::new(CheckKind::Underflow, "main/foo", 7, 3, Verdict::Error);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"underflow","call_context":"main/foo","line":7,"column":3,"verdict":"error"}"#
        );
    }

    #[test]
    fn test_summary_counts() {
        let records = vec![
            CheckRecord::new(CheckKind::Overflow, "main", 1, 1, Verdict::Ok),
            CheckRecord::new(CheckKind::Overflow, "main", 2, 1, Verdict::Error),
            CheckRecord::new(CheckKind::Underflow, "main", 1, 1, Verdict::Ok),
            CheckRecord::new(CheckKind::Underflow, "main", 2, 1, Verdict::Unreachable),
        ];

        let summary = ResultSummary::from_records(&records);
        assert_eq!(summary.overflow.ok, 1);
        assert_eq!(summary.overflow.error, 1);
        assert_eq!(summary.underflow.unreachable, 1);
        assert_eq!(summary.kind(CheckKind::Underflow).total(), 2);
        assert_eq!(summary.total(), 4);
    }
}
