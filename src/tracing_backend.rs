//! Tracing library backend implementation.

use crate::backend::Backend;

/// Backend that delegates to the `tracing` macros.
///
/// Bridges the six-level [`Backend`] interface to the `tracing`
/// ecosystem, so adapters built by this crate emit through whatever
/// subscriber the application has installed. A subscriber must already be
/// initialized before messages reach it; this crate performs no
/// initialization of its own.
///
/// `tracing` has no fatal or panic levels. Both map to `error!` and the
/// backend never terminates the process; callers that want abort
/// semantics own them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    /// Create a new tracing backend.
    pub fn new() -> Self {
        Self
    }
}

impl Backend for TracingBackend {
    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn fatal(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn panic(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
