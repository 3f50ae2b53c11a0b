//! Bounds Check Domain Layer
//!
//! Allocation candidates, pointer resolutions and check outcomes. The
//! persisted record types (`CheckKind`, `Verdict`, `CheckRecord`) live in
//! `boundcheck_storage` and are re-exported here.

use std::collections::BTreeMap;

pub use boundcheck_storage::{CheckKind, CheckRecord, Verdict};

use crate::shared::models::VarName;

/// One object a pointer may reference, with the variable tracking its size
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AllocationCandidate {
    pub address: VarName,
    pub size: VarName,
}

impl AllocationCandidate {
    pub fn new(address: impl Into<VarName>, size: impl Into<VarName>) -> Self {
        Self {
            address: address.into(),
            size: size.into(),
        }
    }
}

/// Non-empty set of candidates, ordered by address
///
/// Duplicate addresses collapse to one entry, so any fold over the set is
/// independent of the order the points-to collaborator reported them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    candidates: Vec<AllocationCandidate>,
}

impl CandidateSet {
    /// `None` when `candidates` is empty
    pub fn new(candidates: impl IntoIterator<Item = AllocationCandidate>) -> Option<Self> {
        let by_address: BTreeMap<VarName, AllocationCandidate> = candidates
            .into_iter()
            .map(|c| (c.address.clone(), c))
            .collect();

        if by_address.is_empty() {
            return None;
        }

        Some(Self {
            candidates: by_address.into_values().collect(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &AllocationCandidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a AllocationCandidate;
    type IntoIter = std::slice::Iter<'a, AllocationCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// Result of resolving a pointer under an invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerResolution {
    Unknown,
    Candidates(CandidateSet),
}

impl PointerResolution {
    pub fn is_unknown(&self) -> bool {
        matches!(self, PointerResolution::Unknown)
    }

    pub fn candidates(&self) -> Option<&CandidateSet> {
        match self {
            PointerResolution::Candidates(set) => Some(set),
            PointerResolution::Unknown => None,
        }
    }
}

/// Overflow verdict from the two per-candidate quantifications
///
/// `all_invalid` wins over `all_valid`: if no candidate ever admits a valid
/// offset the access is an error even when the high side is also proven.
pub fn classify_overflow(all_valid: bool, all_invalid: bool) -> Verdict {
    if all_invalid {
        Verdict::Error
    } else if !all_valid {
        Verdict::Warning
    } else {
        Verdict::Ok
    }
}

/// Underflow verdict from the two single-sided feasibility tests
pub fn classify_underflow(may_be_negative: bool, may_be_non_negative: bool) -> Verdict {
    match (may_be_negative, may_be_non_negative) {
        (false, _) => Verdict::Ok,
        (true, false) => Verdict::Error,
        (true, true) => Verdict::Warning,
    }
}

/// What a single `check` call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Direct global or stack-slot reference; nothing written
    Skipped,
    /// Records written to the sink, in write order
    Recorded(Vec<CheckRecord>),
}

impl CheckOutcome {
    pub fn records(&self) -> &[CheckRecord] {
        match self {
            CheckOutcome::Skipped => &[],
            CheckOutcome::Recorded(records) => records,
        }
    }

    pub fn verdict(&self, kind: CheckKind) -> Option<Verdict> {
        self.records()
            .iter()
            .find(|r| r.kind() == kind)
            .map(CheckRecord::verdict)
    }

    pub fn overflow(&self) -> Option<Verdict> {
        self.verdict(CheckKind::Overflow)
    }

    pub fn underflow(&self) -> Option<Verdict> {
        self.verdict(CheckKind::Underflow)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, CheckOutcome::Skipped)
    }
}
