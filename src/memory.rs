//! In-memory backend that records messages for assertions.

use std::sync::Mutex;

use crate::backend::Backend;
use crate::level::Level;

/// One captured log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Severity the message was dispatched at.
    pub level: Level,
    /// The fully formatted message, exactly as the backend received it.
    pub message: String,
}

/// Backend that appends every message to an in-memory buffer.
///
/// Fills the role a buffered sink plays in tests: adapters log through it
/// and assertions inspect [`records`](MemoryBackend::records) or
/// [`lines`](MemoryBackend::lines) afterwards. The mutex exists only to
/// collect output; the logging path itself holds it briefly per message.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: Mutex<Vec<Record>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured records, in arrival order.
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().expect("memory backend lock poisoned").clone()
    }

    /// Captured records rendered as `"LEVEL message"` lines.
    pub fn lines(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .map(|record| format!("{} {}", record.level, record.message))
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.records
            .lock()
            .expect("memory backend lock poisoned")
            .push(Record {
                level,
                message: message.to_string(),
            });
    }
}

impl Backend for MemoryBackend {
    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn fatal(&self, message: &str) {
        self.push(Level::Fatal, message);
    }

    fn panic(&self, message: &str) {
        self.push(Level::Panic, message);
    }
}
