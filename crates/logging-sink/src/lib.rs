#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the single serialization point through which every
//! component logger in the process writes its diagnostics. The [`Sink`] renders
//! one line per emission and streams it to a [`SinkWriter`], which is the
//! process error stream unless a caller swaps it for something else.
//!
//! # Design
//!
//! The sink never owns the lock that protects it. Startup code injects a
//! [`BasicLockable`] with process lifetime through [`Sink::set_lock`]; each
//! emission then acquires it through a [`LockGuard`] for the whole line and
//! releases it when the guard drops. Lock, writer, and [`LineFormat`] live behind
//! one `RwLock` so an emission always observes a consistent binding, even when
//! reconfiguration races with worker threads.
//!
//! # Invariants
//!
//! - With a lock bound, at most one line is being written at any time.
//! - The lock is released on every exit path, including write failures and
//!   unwinding out of the writer.
//! - Each line reaches the writer in one call, so a failed write drops the
//!   whole line rather than leaving a fragment. Without a lock, ordering
//!   across threads is whatever the writer provides.
//!
//! # Errors
//!
//! Emission never reports failures. Errors from the underlying writer are
//! discarded so diagnostics can never destabilise the host process.
//!
//! # Examples
//!
//! Capture two lines in memory while a [`ThreadLock`] serializes writers:
//!
//! ```
//! use logging_sink::{LineFormat, MemoryWriter, Sink, ThreadLock};
//!
//! static LOCK: ThreadLock = ThreadLock::new();
//!
//! let writer = MemoryWriter::new();
//! let sink = Sink::with_writer(writer.clone());
//! sink.set_format(LineFormat::bare());
//! sink.set_lock(&LOCK);
//!
//! sink.emit("info", "http", "listening");
//! sink.emit("warning", "upstream", "host unhealthy");
//!
//! assert_eq!(
//!     writer.lines(),
//!     ["[info][http] listening", "[warning][upstream] host unhealthy"]
//! );
//! ```
//!
//! # See also
//!
//! - `logging` crate for component loggers, the registry, and the call-site
//!   macros that feed this sink.

mod format;
mod lock;
mod sink;
mod writer;

pub use format::LineFormat;
pub use lock::{BasicLockable, ThreadLock};
pub use sink::{LockGuard, Sink};
pub use writer::{MemoryWriter, SinkWriter, StderrWriter};
