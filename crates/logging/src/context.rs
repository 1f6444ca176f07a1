//! crates/logging/src/context.rs
//! Capabilities call sites draw their logger and line prefixes from.

use std::fmt;

use crate::component::ComponentId;
use crate::logger::Logger;
use crate::registry::get_logger;

/// Binds a type to the component whose logger its statements use.
///
/// Implementing the trait is all a type needs to use the plain and
/// connection/stream-scoped macros from inside its methods.
///
/// ```
/// use logging::{ComponentId, Loggable};
///
/// struct HealthChecker;
///
/// impl Loggable for HealthChecker {
///     const COMPONENT: ComponentId = ComponentId::Hc;
/// }
///
/// assert_eq!(HealthChecker::logger().name(), "hc");
/// ```
pub trait Loggable {
    /// The component this type logs as.
    const COMPONENT: ComponentId;

    /// Returns the global logger for [`COMPONENT`](Self::COMPONENT).
    fn logger() -> &'static Logger {
        get_logger(Self::COMPONENT)
    }
}

/// Something that can name the connection a statement is about.
pub trait ConnectionContext {
    /// The connection identifier rendered as `[C<id>]`.
    fn id(&self) -> u64;
}

/// Something that can name the stream a statement is about.
pub trait StreamContext {
    /// The owning connection, rendered as `[C<id>]`.
    fn connection_id(&self) -> u64;

    /// The stream within the connection, rendered as `[S<id>]`.
    fn stream_id(&self) -> u64;
}

impl<T: ConnectionContext + ?Sized> ConnectionContext for &T {
    fn id(&self) -> u64 {
        (**self).id()
    }
}

impl<T: StreamContext + ?Sized> StreamContext for &T {
    fn connection_id(&self) -> u64 {
        (**self).connection_id()
    }

    fn stream_id(&self) -> u64 {
        (**self).stream_id()
    }
}

/// Renders `args` with the connection prefix.
///
/// ```
/// use logging::{ConnectionContext, format_connection_log};
///
/// struct Conn;
/// impl ConnectionContext for Conn {
///     fn id(&self) -> u64 { 42 }
/// }
///
/// assert_eq!(format_connection_log(&Conn, format_args!("got {} bytes", 10)), "[C42] got 10 bytes");
/// ```
pub fn format_connection_log<C>(connection: &C, args: fmt::Arguments<'_>) -> String
where
    C: ConnectionContext + ?Sized,
{
    format!("[C{}] {args}", connection.id())
}

/// Renders `args` with the connection and stream prefix.
pub fn format_stream_log<S>(stream: &S, args: fmt::Arguments<'_>) -> String
where
    S: StreamContext + ?Sized,
{
    format!("[C{}][S{}] {args}", stream.connection_id(), stream.stream_id())
}
