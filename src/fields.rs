//! Field-bound logger carrying pre-rendered key-value context.

use std::fmt::{Arguments, Display};
use std::sync::Arc;

use crate::backend::{dispatch, Backend};
use crate::level::Level;
use crate::mapper::Advanced;

/// Render field pairs as `"k1=v1 k2=v2"`.
///
/// Pairs render in argument order, single-space separated, with no
/// leading or trailing separator. Pure function of its input; an empty
/// slice renders as the empty string.
pub(crate) fn render_fields(fields: &[(&str, &dyn Display)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Advanced logger with a bound field suffix.
///
/// The suffix is flattened to a string when the logger is constructed and
/// never changes afterwards; individual keys and values are not
/// recoverable. Each message appends the suffix instead of a caller
/// prefix. Further field attachment is deliberately unavailable: binding
/// is a single level deep.
#[derive(Clone)]
pub struct FieldLogger {
    backend: Arc<dyn Backend>,
    fields: String,
}

impl FieldLogger {
    /// Create a field-bound logger over `backend`.
    pub fn new(backend: Arc<dyn Backend>, fields: &[(&str, &dyn Display)]) -> Self {
        Self {
            backend,
            fields: render_fields(fields),
        }
    }

    /// The rendered `"k1=v1 k2=v2"` suffix.
    pub fn fields(&self) -> &str {
        &self.fields
    }
}

impl Advanced for FieldLogger {
    #[track_caller]
    fn level_print(&self, level: Level, values: &[&dyn Display]) {
        let mut message = String::new();
        for value in values {
            message.push_str(&value.to_string());
        }
        if !self.fields.is_empty() {
            message.push(' ');
            message.push_str(&self.fields);
        }
        dispatch(self.backend.as_ref(), level, &message);
    }

    #[track_caller]
    fn level_printf(&self, level: Level, args: Arguments<'_>) {
        let message = if self.fields.is_empty() {
            args.to_string()
        } else {
            format!("{} {}", args, self.fields)
        };
        dispatch(self.backend.as_ref(), level, &message);
    }

    #[track_caller]
    fn level_println(&self, level: Level, values: &[&dyn Display]) {
        let mut parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        if !self.fields.is_empty() {
            parts.push(self.fields.clone());
        }
        let mut message = parts.join(" ");
        message.push('\n');
        dispatch(self.backend.as_ref(), level, &message);
    }
}

/// Construct a boxed [`Advanced`] logger over `backend` with `fields`
/// bound.
pub fn new_advanced(backend: Arc<dyn Backend>, fields: &[(&str, &dyn Display)]) -> Box<dyn Advanced> {
    Box::new(FieldLogger::new(backend, fields))
}
