//! Error types for boundcheck-storage
//!
//! One error struct for every sink: a coarse [`ErrorKind`], a human message,
//! and the underlying driver error when there is one.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// SQLite failure
    Database,
    /// A record could not be encoded as JSON
    Serialization,
    /// A persisted row holds a token outside the record schema
    Decode,
    /// Writer or file failure
    IO,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Database => "database",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Decode => "decode",
            ErrorKind::IO => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure raised by a [`ResultSink`](crate::ResultSink) or a store query
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct StorageError {
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the driver error that caused this one
    pub fn caused_by(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(cause));
        self
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// A schema token (`kind` or `verdict` column) that does not parse
    pub fn unknown_token(field: &str, token: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Decode,
            format!("Unknown {} token: '{}'", field, token.into()),
        )
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        let message = format!("SQLite error: {}", err);
        StorageError::database(message).caused_by(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        let message = format!("Cannot encode record: {}", err);
        StorageError::new(ErrorKind::Serialization, message).caused_by(err)
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        let message = format!("I/O error: {}", err);
        StorageError::new(ErrorKind::IO, message).caused_by(err)
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
