//! Infrastructure layer - ResultSink adapters
//!
//! - `MemoryResultSink`: in-process record buffer
//! - `JsonLinesSink`: one JSON object per line on any writer
//! - `SharedResultSink`: lock-serialized wrapper for parallel drivers
//! - `SqliteResultStore`: results database (feature `sqlite`)

pub mod json_lines;
pub mod memory;
pub mod shared;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use json_lines::JsonLinesSink;
pub use memory::MemoryResultSink;
pub use shared::SharedResultSink;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteResultStore;
