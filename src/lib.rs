//! Contextual logging adapter over a leveled logging backend.
//!
//! This crate lets a leveled logging backend (six print-style functions,
//! one per severity) satisfy a generic, structured logging interface. It
//! translates leveled calls, attaches key-value context fields, and
//! annotates each message with the caller's source location.
//!
//! # Architecture
//!
//! - [`Backend`]: the consumed interface, one write method per severity.
//!   Shipped implementations: [`TracingBackend`] (production, delegates
//!   to `tracing`), [`NoOpBackend`] (silent), [`MemoryBackend`] (captures
//!   output for tests).
//! - [`Advanced`] / [`Contextual`]: the exposed capabilities. Every
//!   leveled convenience method reduces to one of three primitive
//!   dispatch shapes; `Contextual` additionally binds key-value fields.
//! - [`CallerLogger`]: contextual adapter that prefixes each message with
//!   the caller's `"dir/file.rs:line:"`.
//! - [`FieldLogger`]: advanced adapter that appends a pre-rendered
//!   `"k1=v1 k2=v2"` suffix instead.
//!
//! Backends are injected at construction, so call sites stay clean and
//! tests swap in [`MemoryBackend`] without touching global state. No
//! logging call ever fails visibly; errors never propagate to the caller.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use ctxlog::{new_logger, Advanced, Contextual, MemoryBackend};
//!
//! let backend = Arc::new(MemoryBackend::new());
//! let logger = new_logger(backend.clone());
//!
//! logger.info(&[&"service started"]);
//! ctxlog::log_warn!(logger, "queue depth {}", 17);
//!
//! let bound = logger.with_field("request", &42);
//! bound.error(&[&"timed out"]);
//!
//! let lines = backend.lines();
//! assert!(lines[2].ends_with("timed out request=42"));
//! ```

mod backend;
mod caller;
mod fields;
mod level;
mod logger;
mod mapper;
mod memory;
mod noop;
mod tracing_backend;

pub use backend::{dispatch, Backend};
pub use fields::{new_advanced, FieldLogger};
pub use level::Level;
pub use logger::{new_logger, CallerLogger};
pub use mapper::{Advanced, Contextual};
pub use memory::{MemoryBackend, Record};
pub use noop::NoOpBackend;
pub use tracing_backend::TracingBackend;
