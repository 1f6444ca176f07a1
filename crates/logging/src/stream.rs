//! crates/logging/src/stream.rs
//! Stream-style statements: accumulate with chained appends, dispatch once on drop.

use std::fmt::{self, Write as _};

use crate::backend::Dispatch;
use crate::logger::Logger;

/// A statement under construction.
///
/// Content is appended piece by piece; the finished message is handed to the
/// logger's backend exactly once, when the stream is dropped. If the severity
/// is not enabled at creation time, appends are ignored without formatting
/// anything and nothing is dispatched.
///
/// ```
/// use logging::{ComponentId, LineFormat, MemoryWriter, Registry, Sink, SeverityLevel};
///
/// let writer = MemoryWriter::new();
/// let registry = Registry::with_sink(Sink::with_writer(writer.clone()));
/// registry.sink().set_format(LineFormat::bare());
/// let logger = registry.logger(ComponentId::Hc);
///
/// {
///     let mut stream = logger.stream(SeverityLevel::Info);
///     stream.push("hc response=").push(503);
///     stream.push(" health_flags=").push("/failed_active_hc");
///     assert!(writer.lines().is_empty());
/// }
///
/// assert_eq!(writer.lines(), ["[info][hc] hc response=503 health_flags=/failed_active_hc"]);
/// ```
pub struct LogStream<'a> {
    logger: &'a Logger,
    dispatch: Dispatch,
    enabled: bool,
    message: String,
}

impl<'a> LogStream<'a> {
    pub(crate) fn new(logger: &'a Logger, dispatch: Dispatch) -> Self {
        Self {
            logger,
            dispatch,
            enabled: logger.is_enabled(dispatch.severity()),
            message: String::new(),
        }
    }

    /// Reports whether this stream will dispatch when dropped.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the channel and sub-level the stream dispatches on.
    #[must_use]
    pub const fn dispatch(&self) -> Dispatch {
        self.dispatch
    }

    /// Appends `value` and returns the stream for further chaining.
    pub fn append<T: fmt::Display>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Appends `value` in place.
    pub fn push<T: fmt::Display>(&mut self, value: T) -> &mut Self {
        if self.enabled {
            let _ = write!(self.message, "{value}");
        }
        self
    }
}

impl fmt::Write for LogStream<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.enabled {
            self.message.push_str(s);
        }
        Ok(())
    }
}

impl fmt::Debug for LogStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStream")
            .field("logger", &self.logger.name())
            .field("dispatch", &self.dispatch)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl Drop for LogStream<'_> {
    fn drop(&mut self) {
        if self.enabled {
            self.logger.dispatch(self.dispatch, &self.message);
        }
    }
}
