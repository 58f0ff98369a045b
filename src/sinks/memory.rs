//! In-memory capture sink

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

/// Collects written lines in memory
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// other to a logger.
///
/// ```
/// use rust_flat_logger::prelude::*;
/// use serde_json::json;
///
/// let out = MemorySink::new();
/// let err = MemorySink::new();
/// let logger = Logger::builder()
///     .name("svc")
///     .namespace("boot")
///     .streams(OutputStreams::new(out.clone(), err.clone()))
///     .build();
///
/// logger.error(&json!({"message": "boot failed"})).unwrap();
/// assert!(out.is_empty());
/// assert_eq!(err.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drain the buffer
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Parse every line as JSON
    pub fn records(&self) -> Result<Vec<Value>> {
        self.lines
            .lock()
            .iter()
            .map(|line| serde_json::from_str::<Value>(line).map_err(LoggerError::from))
            .collect()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
