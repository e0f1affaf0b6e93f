//! Generic logging capabilities built on three primitive dispatch shapes.
//!
//! Every leveled convenience method reduces to one of three primitives:
//! plain concatenation (`level_print`), positional formatting
//! (`level_printf`), or space-joined output with a trailing newline
//! (`level_println`). Adapters implement only the primitives; the
//! conveniences are provided here.
//!
//! All methods carry `#[track_caller]` so the call site recorded by a
//! caller-annotating adapter is the application's line, not one of these
//! forwarding bodies. This holds through `dyn` dispatch as well.

use std::fmt::{Arguments, Display};

use crate::level::Level;

/// Logging capability with already-bound context.
///
/// An `Advanced` logger can emit leveled messages but cannot attach
/// further key-value context.
pub trait Advanced: Send + Sync {
    /// Emit `values` concatenated with no separators at `level`.
    #[track_caller]
    fn level_print(&self, level: Level, values: &[&dyn Display]);

    /// Emit a formatted message at `level`.
    ///
    /// Build `args` with `format_args!`; formatting follows `std::fmt`
    /// defaults and never fails the call.
    #[track_caller]
    fn level_printf(&self, level: Level, args: Arguments<'_>);

    /// Emit `values` joined by single spaces, with exactly one trailing
    /// newline, at `level`.
    #[track_caller]
    fn level_println(&self, level: Level, values: &[&dyn Display]);

    /// Log values at debug level.
    #[track_caller]
    fn debug(&self, values: &[&dyn Display]) {
        self.level_print(Level::Debug, values);
    }

    /// Log a formatted message at debug level.
    #[track_caller]
    fn debugf(&self, args: Arguments<'_>) {
        self.level_printf(Level::Debug, args);
    }

    /// Log space-joined values at debug level.
    #[track_caller]
    fn debugln(&self, values: &[&dyn Display]) {
        self.level_println(Level::Debug, values);
    }

    /// Log values at info level.
    #[track_caller]
    fn info(&self, values: &[&dyn Display]) {
        self.level_print(Level::Info, values);
    }

    /// Log a formatted message at info level.
    #[track_caller]
    fn infof(&self, args: Arguments<'_>) {
        self.level_printf(Level::Info, args);
    }

    /// Log space-joined values at info level.
    #[track_caller]
    fn infoln(&self, values: &[&dyn Display]) {
        self.level_println(Level::Info, values);
    }

    /// Log values at warn level.
    #[track_caller]
    fn warn(&self, values: &[&dyn Display]) {
        self.level_print(Level::Warn, values);
    }

    /// Log a formatted message at warn level.
    #[track_caller]
    fn warnf(&self, args: Arguments<'_>) {
        self.level_printf(Level::Warn, args);
    }

    /// Log space-joined values at warn level.
    #[track_caller]
    fn warnln(&self, values: &[&dyn Display]) {
        self.level_println(Level::Warn, values);
    }

    /// Log values at error level.
    #[track_caller]
    fn error(&self, values: &[&dyn Display]) {
        self.level_print(Level::Error, values);
    }

    /// Log a formatted message at error level.
    #[track_caller]
    fn errorf(&self, args: Arguments<'_>) {
        self.level_printf(Level::Error, args);
    }

    /// Log space-joined values at error level.
    #[track_caller]
    fn errorln(&self, values: &[&dyn Display]) {
        self.level_println(Level::Error, values);
    }

    /// Log values at fatal level.
    #[track_caller]
    fn fatal(&self, values: &[&dyn Display]) {
        self.level_print(Level::Fatal, values);
    }

    /// Log a formatted message at fatal level.
    #[track_caller]
    fn fatalf(&self, args: Arguments<'_>) {
        self.level_printf(Level::Fatal, args);
    }

    /// Log space-joined values at fatal level.
    #[track_caller]
    fn fatalln(&self, values: &[&dyn Display]) {
        self.level_println(Level::Fatal, values);
    }

    /// Log values at panic level.
    #[track_caller]
    fn panic(&self, values: &[&dyn Display]) {
        self.level_print(Level::Panic, values);
    }

    /// Log a formatted message at panic level.
    #[track_caller]
    fn panicf(&self, args: Arguments<'_>) {
        self.level_printf(Level::Panic, args);
    }

    /// Log space-joined values at panic level.
    #[track_caller]
    fn panicln(&self, values: &[&dyn Display]) {
        self.level_println(Level::Panic, values);
    }
}

/// Logging capability that can also attach key-value context.
///
/// Attaching fields returns a new [`Advanced`] logger carrying the
/// rendered context; the receiver is never mutated. Field binding is a
/// single level deep: the returned logger cannot attach further context.
pub trait Contextual: Advanced {
    /// Bind one key-value pair, returning a field-carrying logger.
    fn with_field(&self, key: &str, value: &dyn Display) -> Box<dyn Advanced>;

    /// Bind an ordered sequence of key-value pairs, returning a
    /// field-carrying logger.
    ///
    /// Pairs render as `"k1=v1 k2=v2"` in argument order, single-space
    /// separated, with no leading or trailing separator.
    fn with_fields(&self, fields: &[(&str, &dyn Display)]) -> Box<dyn Advanced>;
}

/// Convenience macros for formatted logging.
///
/// Each expands to the matching `*f` method with `format_args!`, so the
/// recorded call site is the macro invocation line.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debugf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.infof(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warnf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.errorf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatalf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($arg:tt)*) => {
        $logger.panicf(format_args!($($arg)*))
    };
}
