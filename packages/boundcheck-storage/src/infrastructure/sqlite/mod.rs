//! SQLite results database
//!
//! One row per written record, in the record schema's field order:
//!
//! ```text
//! checks(kind, call_context, line, "column", verdict)
//! ```

use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Arc;

use crate::domain::{CheckKind, CheckRecord, ResultSink, ResultSummary};
use crate::Result;

/// SQLite-backed `ResultSink`
#[derive(Clone)]
pub struct SqliteResultStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteResultStore {
    /// Open (or create) a results database at the given path
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory results database (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock();

        conn.execute(
            "CREATE TABLE IF NOT EXISTS checks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                kind TEXT NOT NULL,
                call_context TEXT NOT NULL,
                line INTEGER NOT NULL,
                \"column\" INTEGER NOT NULL,
                verdict TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_checks_location
             ON checks(kind, line, \"column\")",
            [],
        )?;

        Ok(())
    }

    /// All records in insertion order
    pub fn records(&self) -> Result<Vec<CheckRecord>> {
        self.query_records(
            "SELECT kind, call_context, line, \"column\", verdict FROM checks ORDER BY id",
            None,
        )
    }

    /// Records of one check kind in insertion order
    pub fn records_of_kind(&self, kind: CheckKind) -> Result<Vec<CheckRecord>> {
        self.query_records(
            "SELECT kind, call_context, line, \"column\", verdict FROM checks
             WHERE kind = ?1 ORDER BY id",
            Some(kind),
        )
    }

    pub fn summary(&self) -> Result<ResultSummary> {
        Ok(ResultSummary::from_records(&self.records()?))
    }

    fn query_records(&self, sql: &str, kind: Option<CheckKind>) -> Result<Vec<CheckRecord>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(sql)?;

        let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<(String, String, u32, u32, String)> {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u32>(2)?,
                row.get::<_, u32>(3)?,
                row.get::<_, String>(4)?,
            ))
        };

        let rows = match kind {
            Some(kind) => stmt
                .query_map(params![kind.as_str()], map_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?,
            None => stmt
                .query_map([], map_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?,
        };

        rows.into_iter()
            .map(|(kind, call_context, line, column, verdict)| -> Result<CheckRecord> {
                Ok(CheckRecord {
                    kind: kind.parse()?,
                    call_context,
                    line,
                    column,
                    verdict: verdict.parse()?,
                })
            })
            .collect()
    }
}

impl ResultSink for SqliteResultStore {
    fn write(&mut self, record: &CheckRecord) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO checks (kind, call_context, line, \"column\", verdict)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.kind().as_str(),
                record.call_context(),
                record.line(),
                record.column(),
                record.verdict().as_str()
            ],
        )?;
        Ok(())
    }
}
