//! Caller-annotating contextual logger.

use std::fmt::{Arguments, Display};
use std::panic::Location;
use std::sync::Arc;

use crate::backend::{dispatch, Backend};
use crate::caller;
use crate::fields::FieldLogger;
use crate::level::Level;
use crate::mapper::{Advanced, Contextual};

/// Contextual logger that prefixes every message with its call site.
///
/// The backend is injected at construction; the adapter holds no other
/// state and is immutable, so instances can be shared freely across
/// threads. [`Contextual::with_fields`] returns a new [`FieldLogger`]
/// bound to the same backend; the receiver is unchanged.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ctxlog::{Advanced, CallerLogger, MemoryBackend};
///
/// let backend = Arc::new(MemoryBackend::new());
/// let logger = CallerLogger::new(backend.clone());
/// logger.info(&[&"service started"]);
///
/// let message = &backend.records()[0].message;
/// assert!(message.ends_with(" service started"));
/// ```
#[derive(Clone)]
pub struct CallerLogger {
    backend: Arc<dyn Backend>,
}

impl CallerLogger {
    /// Create a contextual logger over `backend`.
    ///
    /// The backend's sinks must already be configured; this crate has no
    /// visibility into that lifecycle and performs no initialization.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }
}

impl Advanced for CallerLogger {
    #[track_caller]
    fn level_print(&self, level: Level, values: &[&dyn Display]) {
        let mut message = caller::call_site(Some(Location::caller()));
        message.push(' ');
        for value in values {
            message.push_str(&value.to_string());
        }
        dispatch(self.backend.as_ref(), level, &message);
    }

    #[track_caller]
    fn level_printf(&self, level: Level, args: Arguments<'_>) {
        let site = caller::call_site(Some(Location::caller()));
        let message = format!("{} {}", site, args);
        dispatch(self.backend.as_ref(), level, &message);
    }

    #[track_caller]
    fn level_println(&self, level: Level, values: &[&dyn Display]) {
        let mut message = caller::call_site(Some(Location::caller()));
        for value in values {
            message.push(' ');
            message.push_str(&value.to_string());
        }
        message.push('\n');
        dispatch(self.backend.as_ref(), level, &message);
    }
}

impl Contextual for CallerLogger {
    fn with_field(&self, key: &str, value: &dyn Display) -> Box<dyn Advanced> {
        self.with_fields(&[(key, value)])
    }

    fn with_fields(&self, fields: &[(&str, &dyn Display)]) -> Box<dyn Advanced> {
        Box::new(FieldLogger::new(self.backend.clone(), fields))
    }
}

/// Construct a boxed [`Contextual`] logger over `backend`.
pub fn new_logger(backend: Arc<dyn Backend>) -> Box<dyn Contextual> {
    Box::new(CallerLogger::new(backend))
}
