//! boundcheck-storage - Results database for the bounds checker
//!
//! ## Core Principles
//!
//! 1. **Append-only**: a record is written once per checked access and kind,
//!    never updated or deleted
//! 2. **Stable schema**: `(kind, call_context, line, column, verdict)` with
//!    fixed tokens, consumed by downstream tooling
//! 3. **Sink-agnostic checker**: the checker only sees the `ResultSink` port
//!
//! ## Usage
//!
//! ```rust
//! use boundcheck_storage::{CheckKind, CheckRecord, MemoryResultSink, ResultSink, Verdict};
//!
//! let mut sink = MemoryResultSink::new();
//! sink.write(&CheckRecord::new(CheckKind::Overflow, "main", 12, 5, Verdict::Warning))
//!     .unwrap();
//!
//! assert_eq!(sink.summary().overflow.warning, 1);
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, StorageError};

pub use domain::{CheckKind, CheckRecord, KindSummary, ResultSink, ResultSummary, Verdict};
pub use infrastructure::{JsonLinesSink, MemoryResultSink, SharedResultSink};

#[cfg(feature = "sqlite")]
pub use infrastructure::SqliteResultStore;
