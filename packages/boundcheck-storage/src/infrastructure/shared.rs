//! Lock-serialized sink for drivers that check instructions in parallel

use parking_lot::Mutex;
use std::sync::Arc;

use crate::domain::{CheckRecord, ResultSink};
use crate::Result;

/// Cloneable handle; every clone writes into the same inner sink
pub struct SharedResultSink<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for SharedResultSink<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ResultSink> SharedResultSink<S> {
    pub fn new(sink: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sink)),
        }
    }

    /// Run `f` with exclusive access to the inner sink
    pub fn with_inner<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Recover the inner sink if this is the last handle
    pub fn try_into_inner(self) -> std::result::Result<S, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner()),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl<S: ResultSink> ResultSink for SharedResultSink<S> {
    fn write(&mut self, record: &CheckRecord) -> Result<()> {
        self.inner.lock().write(record)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.lock().flush()
    }
}
