//! crates/logging/src/macros.rs
//! Call-site macros.
//!
//! Every statement checks [`Logger::is_enabled`](crate::Logger::is_enabled)
//! before evaluating any of its message arguments. Trace and debug statements
//! are additionally removed at build time unless `debug_assertions` is on or
//! the `debug-logs` feature is enabled: in that case the whole statement,
//! argument expressions included, expands to `()`.
//!
//! Level names accepted by the facility forms: `trace`, `debug`, `info`,
//! `warn`, `error`, `fatal`.
//!
//! The plain and `*_facility!` forms resolve their logger through
//! `<Self as Loggable>::logger()`, so they must be used inside an `impl` of a
//! type implementing [`Loggable`](crate::Loggable).

#[cfg(any(debug_assertions, feature = "debug-logs"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __debug_statement {
    ($($statement:tt)*) => {
        $($statement)*
    };
}

#[cfg(not(any(debug_assertions, feature = "debug-logs")))]
#[doc(hidden)]
#[macro_export]
macro_rules! __debug_statement {
    ($($statement:tt)*) => {
        ()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_to {
    ($level:expr, $logger:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        let level: $crate::SeverityLevel = $level;
        if logger.is_enabled(level) {
            logger.log(level, ::std::format_args!($($arg)+));
        }
    }};
}

/// Logs to an explicit logger at a named level.
///
/// ```
/// use logging::{ComponentId, LineFormat, MemoryWriter, Registry, Sink, log_facility};
///
/// let writer = MemoryWriter::new();
/// let registry = Registry::with_sink(Sink::with_writer(writer.clone()));
/// registry.sink().set_format(LineFormat::bare());
/// let logger = registry.logger(ComponentId::Upstream);
///
/// log_facility!(info, logger, "adding host {}", "10.0.0.1:80");
/// log_facility!(debug, logger, "below the threshold");
///
/// assert_eq!(writer.lines(), ["[info][upstream] adding host 10.0.0.1:80"]);
/// ```
#[macro_export]
macro_rules! log_facility {
    (trace, $logger:expr, $($arg:tt)+) => {
        $crate::__debug_statement! {
            $crate::__log_to!($crate::SeverityLevel::Trace, $logger, $($arg)+)
        }
    };
    (debug, $logger:expr, $($arg:tt)+) => {
        $crate::__debug_statement! {
            $crate::__log_to!($crate::SeverityLevel::Debug, $logger, $($arg)+)
        }
    };
    (info, $logger:expr, $($arg:tt)+) => {
        $crate::__log_to!($crate::SeverityLevel::Info, $logger, $($arg)+)
    };
    (warn, $logger:expr, $($arg:tt)+) => {
        $crate::__log_to!($crate::SeverityLevel::Warning, $logger, $($arg)+)
    };
    (error, $logger:expr, $($arg:tt)+) => {
        $crate::__log_to!($crate::SeverityLevel::Error, $logger, $($arg)+)
    };
    (fatal, $logger:expr, $($arg:tt)+) => {
        $crate::__log_to!($crate::SeverityLevel::Fatal, $logger, $($arg)+)
    };
}

/// Logs to an explicit logger with a `[C<id>] ` connection prefix.
///
/// The connection expression is only evaluated when the statement is enabled.
#[macro_export]
macro_rules! conn_log_to {
    ($level:ident, $logger:expr, $connection:expr, $($arg:tt)+) => {
        $crate::log_facility!(
            $level,
            $logger,
            "[C{}] {}",
            $crate::ConnectionContext::id(&$connection),
            ::std::format_args!($($arg)+)
        )
    };
}

/// Logs to an explicit logger with a `[C<id>][S<id>] ` stream prefix.
#[macro_export]
macro_rules! stream_log_to {
    ($level:ident, $logger:expr, $stream:expr, $($arg:tt)+) => {
        $crate::log_facility!(
            $level,
            $logger,
            "[C{}][S{}] {}",
            $crate::StreamContext::connection_id(&$stream),
            $crate::StreamContext::stream_id(&$stream),
            ::std::format_args!($($arg)+)
        )
    };
}

/// Connection-scoped statement on the enclosing type's logger.
///
/// ```ignore
/// conn_log_facility!(debug, self.connection, "echo: got {} bytes", data.len());
/// ```
#[macro_export]
macro_rules! conn_log_facility {
    ($level:ident, $connection:expr, $($arg:tt)+) => {
        $crate::conn_log_to!(
            $level,
            <Self as $crate::Loggable>::logger(),
            $connection,
            $($arg)+
        )
    };
}

/// Stream-scoped statement on the enclosing type's logger.
///
/// ```ignore
/// stream_log_facility!(info, self.callbacks, "request reset");
/// ```
#[macro_export]
macro_rules! stream_log_facility {
    ($level:ident, $stream:expr, $($arg:tt)+) => {
        $crate::stream_log_to!(
            $level,
            <Self as $crate::Loggable>::logger(),
            $stream,
            $($arg)+
        )
    };
}

/// Statement on the `misc` logger; needs no [`Loggable`](crate::Loggable) binding.
///
/// ```
/// logging::log_misc!(info, "loaded {} listeners", 2);
/// ```
#[macro_export]
macro_rules! log_misc {
    ($level:ident, $($arg:tt)+) => {
        $crate::log_facility!(
            $level,
            $crate::get_logger($crate::ComponentId::Misc),
            $($arg)+
        )
    };
}

/// Trace statement on the enclosing type's logger; compiled out of optimized builds.
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)+) => {
        $crate::log_facility!(trace, <Self as $crate::Loggable>::logger(), $($arg)+)
    };
}

/// Debug statement on the enclosing type's logger; compiled out of optimized builds.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::log_facility!(debug, <Self as $crate::Loggable>::logger(), $($arg)+)
    };
}

/// Info statement on the enclosing type's logger.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::log_facility!(info, <Self as $crate::Loggable>::logger(), $($arg)+)
    };
}

/// Warning statement on the enclosing type's logger.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::log_facility!(warn, <Self as $crate::Loggable>::logger(), $($arg)+)
    };
}

/// Error statement on the enclosing type's logger.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::log_facility!(error, <Self as $crate::Loggable>::logger(), $($arg)+)
    };
}

/// Fatal statement on the enclosing type's logger.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => {
        $crate::log_facility!(fatal, <Self as $crate::Loggable>::logger(), $($arg)+)
    };
}
