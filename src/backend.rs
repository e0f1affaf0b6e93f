//! Backend interface and severity dispatch.

use crate::level::Level;

/// Leveled print interface consumed from the host logging framework.
///
/// One method per severity. Each receives a fully formatted message and
/// performs the actual write; this crate does no I/O of its own. The
/// backend owns all sink, formatting, and lifecycle concerns, including
/// whatever `fatal` and `panic` mean for the process.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; adapters are freely shared
/// across threads and offer exactly the concurrency guarantees of the
/// backend they wrap.
pub trait Backend: Send + Sync {
    /// Write a debug-level message.
    fn debug(&self, message: &str);

    /// Write an info-level message.
    fn info(&self, message: &str);

    /// Write a warn-level message.
    fn warn(&self, message: &str);

    /// Write an error-level message.
    fn error(&self, message: &str);

    /// Write a fatal-level message.
    fn fatal(&self, message: &str);

    /// Write a panic-level message.
    fn panic(&self, message: &str);
}

/// Route a message to the backend method for `level`.
///
/// The match is exhaustive over [`Level`], so an unmapped severity cannot
/// exist; the compiler enforces what would otherwise be a runtime abort.
pub fn dispatch(backend: &dyn Backend, level: Level, message: &str) {
    match level {
        Level::Debug => backend.debug(message),
        Level::Info => backend.info(message),
        Level::Warn => backend.warn(message),
        Level::Error => backend.error(message),
        Level::Fatal => backend.fatal(message),
        Level::Panic => backend.panic(message),
    }
}
