//! No-operation backend implementation.

use crate::backend::Backend;

/// A backend that discards all messages.
///
/// Useful for unit tests where log output would be noise, and for silent
/// operation modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpBackend;

impl Backend for NoOpBackend {
    #[inline]
    fn debug(&self, _message: &str) {}

    #[inline]
    fn info(&self, _message: &str) {}

    #[inline]
    fn warn(&self, _message: &str) {}

    #[inline]
    fn error(&self, _message: &str) {}

    #[inline]
    fn fatal(&self, _message: &str) {}

    #[inline]
    fn panic(&self, _message: &str) {}
}
