//! crates/logging/src/backend.rs
//! Emission strategies sitting between a [`Logger`] and its output.
//!
//! A backend may only understand a handful of native channels. The six-step
//! [`SeverityLevel`] scale is layered on top: each level maps to a native
//! [`Channel`] plus a small sub-level tag that disambiguates levels sharing a
//! channel, and the mapping is reversible.
//!
//! | level   | channel   | sub-level |
//! |---------|-----------|-----------|
//! | trace   | `Verbose` | 2         |
//! | debug   | `Verbose` | 1         |
//! | info    | `Info`    | 0         |
//! | warning | `Warning` | 0         |
//! | error   | `Error`   | 0         |
//! | fatal   | `Error`   | 1         |

use std::fmt;
use std::sync::Arc;

use logging_sink::Sink;

use crate::levels::SeverityLevel;
use crate::logger::Logger;

/// Native output channels a backend dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The most verbose channel; carries trace and debug.
    Verbose,
    /// Informational channel.
    Info,
    /// Warning channel.
    Warning,
    /// Error channel; carries error and fatal.
    Error,
}

/// A native channel together with the sub-level tag that identifies the original severity.
///
/// ```
/// use logging::{Channel, Dispatch, SeverityLevel};
///
/// let dispatch = Dispatch::for_level(SeverityLevel::Debug);
/// assert_eq!(dispatch.channel(), Channel::Verbose);
/// assert_eq!(dispatch.sub_level(), 1);
/// assert_eq!(dispatch.severity(), SeverityLevel::Debug);
///
/// // Unknown raw severities fall back to the most verbose channel.
/// assert_eq!(Dispatch::from_raw(42).severity(), SeverityLevel::Trace);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dispatch {
    channel: Channel,
    sub_level: u8,
}

impl Dispatch {
    /// Maps a severity onto its native channel.
    #[must_use]
    pub const fn for_level(level: SeverityLevel) -> Self {
        let (channel, sub_level) = match level {
            SeverityLevel::Trace => (Channel::Verbose, 2),
            SeverityLevel::Debug => (Channel::Verbose, 1),
            SeverityLevel::Info => (Channel::Info, 0),
            SeverityLevel::Warning => (Channel::Warning, 0),
            SeverityLevel::Error => (Channel::Error, 0),
            SeverityLevel::Fatal => (Channel::Error, 1),
        };
        Self { channel, sub_level }
    }

    /// Maps a raw severity value, falling back to trace for values off the scale.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match SeverityLevel::from_raw(raw) {
            Some(level) => Self::for_level(level),
            None => Self::for_level(SeverityLevel::Trace),
        }
    }

    /// Returns the native channel.
    #[must_use]
    pub const fn channel(self) -> Channel {
        self.channel
    }

    /// Returns the tag distinguishing levels that share [`channel`](Self::channel).
    #[must_use]
    pub const fn sub_level(self) -> u8 {
        self.sub_level
    }

    /// Recovers the severity this dispatch was built from.
    #[must_use]
    pub const fn severity(self) -> SeverityLevel {
        match (self.channel, self.sub_level) {
            (Channel::Verbose, 1) => SeverityLevel::Debug,
            (Channel::Verbose, _) => SeverityLevel::Trace,
            (Channel::Info, _) => SeverityLevel::Info,
            (Channel::Warning, _) => SeverityLevel::Warning,
            (Channel::Error, 0) => SeverityLevel::Error,
            (Channel::Error, _) => SeverityLevel::Fatal,
        }
    }
}

impl From<SeverityLevel> for Dispatch {
    fn from(level: SeverityLevel) -> Self {
        Self::for_level(level)
    }
}

/// Strategy a [`Logger`] hands finished messages to.
///
/// Implementations must be callable from any thread and must not fail
/// visibly: anything that goes wrong while writing is swallowed.
pub trait Backend: Send + Sync {
    /// Decides whether a statement at `level` should be built for a logger at `threshold`.
    fn is_enabled(&self, threshold: SeverityLevel, level: SeverityLevel) -> bool {
        level.passes(threshold)
    }

    /// Delivers one finished message.
    fn emit(&self, logger: &Logger, dispatch: Dispatch, message: &str);
}

/// The default backend: renders each message as one line on the shared [`Sink`].
#[derive(Clone)]
pub struct SinkBackend {
    sink: Arc<Sink>,
}

impl SinkBackend {
    /// Creates a backend writing to `sink`.
    #[must_use]
    pub fn new(sink: Arc<Sink>) -> Self {
        Self { sink }
    }

    /// Returns the sink this backend writes to.
    #[must_use]
    pub fn sink(&self) -> &Arc<Sink> {
        &self.sink
    }
}

impl fmt::Debug for SinkBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkBackend")
            .field("sink", &self.sink)
            .finish()
    }
}

impl Backend for SinkBackend {
    fn emit(&self, logger: &Logger, dispatch: Dispatch, message: &str) {
        self.sink.emit(dispatch.severity().name(), logger.name(), message);
    }
}
