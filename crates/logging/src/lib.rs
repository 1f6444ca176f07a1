#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` gives every subsystem of a long-running service its own logger
//! with an independently adjustable severity threshold, while all of them
//! write through one shared [`Sink`]. Subsystems are named by [`ComponentId`];
//! the process-wide [`Registry`] owns exactly one [`Logger`] per component.
//!
//! # Design
//!
//! - [`SeverityLevel`] is a six-step ordered scale. A statement is emitted
//!   when its level is at or above the logger's threshold.
//! - A [`Logger`] hands finished messages to a [`Backend`]. The default
//!   [`SinkBackend`] renders one line per statement on the shared sink; with
//!   the `tracing` feature, `TracingBackend` forwards statements as `tracing`
//!   events instead. Backends see a [`Dispatch`]: the native [`Channel`] plus
//!   a sub-level tag, from which the original severity can be recovered.
//! - Types bind to a component by implementing [`Loggable`]. Call-site macros
//!   such as [`log_info!`] and [`conn_log_facility!`] check the threshold
//!   before evaluating any message argument.
//! - Trace and debug statements are compiled out of builds without
//!   `debug_assertions` unless the `debug-logs` feature is enabled. See
//!   [`DEBUG_STATEMENTS_COMPILED`].
//! - [`LogConfig`] parses `"warning,http=debug"` style directive lists and
//!   applies them to a registry.
//!
//! # Invariants
//!
//! - Each component has exactly one logger for the life of the registry.
//! - Threshold changes are visible to every holder of the same logger.
//! - A statement reaches its backend at most once.
//!
//! # Errors
//!
//! Logging itself never fails. Only parsing reports errors:
//! [`ParseLevelError`], [`ParseComponentError`], and [`ConfigError`].
//!
//! # Examples
//!
//! ```
//! use logging::{ComponentId, LineFormat, MemoryWriter, Registry, Sink, log_facility};
//!
//! let writer = MemoryWriter::new();
//! let registry = Registry::with_sink(Sink::with_writer(writer.clone()));
//! registry.sink().set_format(LineFormat::bare());
//!
//! let runtime = registry.logger(ComponentId::Runtime);
//! log_facility!(warn, runtime, "layer {} missing", "admin");
//!
//! assert_eq!(writer.lines(), ["[warning][runtime] layer admin missing"]);
//! ```
//!
//! # See also
//!
//! - [`logging_sink`] for the sink, writers, and the lock capability.

mod backend;
mod component;
mod config;
mod context;
mod error;
mod levels;
mod logger;
mod macros;
mod registry;
mod stream;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use backend::{Backend, Channel, Dispatch, SinkBackend};
pub use component::ComponentId;
pub use config::{LOG_LEVEL_ENV, LogConfig};
pub use context::{
    ConnectionContext, Loggable, StreamContext, format_connection_log, format_stream_log,
};
pub use error::{ConfigError, ParseComponentError, ParseLevelError};
pub use levels::SeverityLevel;
pub use logger::Logger;
pub use logging_sink::{
    BasicLockable, LineFormat, LockGuard, MemoryWriter, Sink, SinkWriter, StderrWriter,
    ThreadLock,
};
pub use registry::{Registry, get_logger, get_sink, initialize, loggers};
pub use stream::LogStream;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TRACING_TARGET, TracingBackend, init_tracing, tracing_registry};

/// Whether trace and debug statements are compiled into this build.
pub const DEBUG_STATEMENTS_COMPILED: bool = cfg!(any(debug_assertions, feature = "debug-logs"));
