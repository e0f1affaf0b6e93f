//! Call-site formatting for log message prefixes.
//!
//! Call sites are captured with `#[track_caller]` rather than by walking
//! the stack at runtime. Every forwarding layer between the application's
//! logging call and the capture point must carry the attribute, otherwise
//! the reported location is one of this crate's internal methods instead
//! of the caller's line.

use std::panic::Location;

/// Placeholder file name used when a call site cannot be resolved.
const UNKNOWN_FILE: &str = "???";

/// Render a call site as `"dir/file.rs:line:"`.
///
/// The source path is trimmed to at most its last two segments so log
/// lines stay short regardless of where the crate was built. An
/// unresolved site (`None`) renders as `"???:0:"`; logging proceeds with
/// degraded location info rather than failing.
pub(crate) fn call_site(location: Option<&Location<'_>>) -> String {
    match location {
        Some(location) => format!("{}:{}:", shorten_file(location.file()), location.line()),
        None => format!("{}:0:", UNKNOWN_FILE),
    }
}

/// Trim a source path to its last two segments (directory + file name).
///
/// Paths with fewer than two separators are returned unchanged.
fn shorten_file(file: &str) -> &str {
    match file.rfind('/') {
        Some(last) => match file[..last].rfind('/') {
            Some(prev) => &file[prev + 1..],
            None => file,
        },
        None => file,
    }
}
