//! In-memory result sink

use crate::domain::{CheckKind, CheckRecord, ResultSink, ResultSummary};
use crate::Result;

/// Keeps every written record in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryResultSink {
    records: Vec<CheckRecord>,
}

impl MemoryResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[CheckRecord] {
        &self.records
    }

    pub fn records_of_kind(&self, kind: CheckKind) -> impl Iterator<Item = &CheckRecord> {
        self.records.iter().filter(move |r| r.kind() == kind)
    }

    pub fn into_records(self) -> Vec<CheckRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::from_records(&self.records)
    }
}

impl ResultSink for MemoryResultSink {
    fn write(&mut self, record: &CheckRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
