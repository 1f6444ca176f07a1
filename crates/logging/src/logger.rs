//! crates/logging/src/logger.rs
//! One logger per component: a threshold, a name, and a backend.

use std::fmt::{self, Write as _};
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::backend::{Backend, Dispatch};
use crate::component::ComponentId;
use crate::levels::SeverityLevel;
use crate::stream::LogStream;

/// The logger owned by one [`ComponentId`].
///
/// Loggers are created by a [`Registry`](crate::Registry) and live as long as
/// it does. The threshold is an atomic read and written with relaxed ordering:
/// a change made on one thread becomes visible to others eventually, without
/// any ordering relative to statements already in flight.
pub struct Logger {
    id: ComponentId,
    threshold: AtomicU8,
    backend: Arc<dyn Backend>,
}

impl Logger {
    pub(crate) fn new(id: ComponentId, threshold: SeverityLevel, backend: Arc<dyn Backend>) -> Self {
        Self {
            id,
            threshold: AtomicU8::new(threshold.as_raw()),
            backend,
        }
    }

    /// Returns the component this logger belongs to.
    #[must_use]
    pub const fn id(&self) -> ComponentId {
        self.id
    }

    /// Returns the canonical component name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn level(&self) -> SeverityLevel {
        SeverityLevel::from_raw(self.threshold.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Returns the name of the current threshold.
    #[must_use]
    pub fn level_name(&self) -> &'static str {
        self.level().name()
    }

    /// Changes the threshold for statements checked from now on.
    pub fn set_level(&self, level: SeverityLevel) {
        self.threshold.store(level.as_raw(), Ordering::Relaxed);
    }

    /// Reports whether a statement at `level` would be emitted.
    ///
    /// Call sites check this before doing any formatting work.
    #[must_use]
    pub fn is_enabled(&self, level: SeverityLevel) -> bool {
        self.backend.is_enabled(self.level(), level)
    }

    /// Formats `args` and emits the result if `level` is enabled.
    pub fn log(&self, level: SeverityLevel, args: fmt::Arguments<'_>) {
        let mut stream = self.stream(level);
        if stream.is_enabled() {
            let _ = stream.write_fmt(args);
        }
    }

    /// Starts a stream-style statement at `level`.
    ///
    /// The stream dispatches once, when dropped.
    ///
    /// ```
    /// use logging::{ComponentId, LineFormat, MemoryWriter, Registry, Sink, SeverityLevel};
    ///
    /// let writer = MemoryWriter::new();
    /// let registry = Registry::with_sink(Sink::with_writer(writer.clone()));
    /// registry.sink().set_format(LineFormat::bare());
    ///
    /// let logger = registry.logger(ComponentId::Filter);
    /// logger.stream(SeverityLevel::Warning).append("echo: ").append(512).append(" bytes");
    ///
    /// assert_eq!(writer.lines(), ["[warning][filter] echo: 512 bytes"]);
    /// ```
    pub fn stream(&self, level: SeverityLevel) -> LogStream<'_> {
        LogStream::new(self, Dispatch::for_level(level))
    }

    /// Starts a stream-style statement from a raw severity value.
    ///
    /// Values off the scale dispatch on the most verbose channel.
    pub fn raw_stream(&self, raw: u8) -> LogStream<'_> {
        LogStream::new(self, Dispatch::from_raw(raw))
    }

    /// Starts a stream on the verbose sub-scale: `1` is debug, anything else trace.
    pub fn verbose_stream(&self, verbosity: u8) -> LogStream<'_> {
        let level = if verbosity == 1 {
            SeverityLevel::Debug
        } else {
            SeverityLevel::Trace
        };
        self.stream(level)
    }

    pub(crate) fn dispatch(&self, dispatch: Dispatch, message: &str) {
        self.backend.emit(self, dispatch, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}
