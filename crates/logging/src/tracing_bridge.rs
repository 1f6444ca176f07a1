//! crates/logging/src/tracing_bridge.rs
//! Backend that forwards statements to the `tracing` ecosystem.
//!
//! Each statement becomes one event with target [`TRACING_TARGET`]. The
//! component name and the channel sub-level travel as the `component` and
//! `sub_level` fields, so trace and debug statements (both on the verbose
//! channel, emitted at [`tracing::Level::DEBUG`]) stay distinguishable.
//!
//! Threshold filtering still happens in the [`Logger`]; the subscriber only
//! sees statements that passed it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{ComponentId, SeverityLevel, get_logger, init_tracing};
//!
//! init_tracing(SeverityLevel::Debug).expect("no registry yet");
//! logging::log_facility!(debug, get_logger(ComponentId::Router), "cluster not found");
//! ```

use std::io;
use std::sync::Arc;

use logging_sink::Sink;
use tracing::Level;

use crate::backend::{Backend, Channel, Dispatch};
use crate::levels::SeverityLevel;
use crate::logger::Logger;
use crate::registry::Registry;

/// Target attached to every forwarded event.
pub const TRACING_TARGET: &str = "logging";

/// Emits statements as `tracing` events instead of sink lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingBackend;

impl TracingBackend {
    /// The `tracing` level a native channel is emitted at.
    #[must_use]
    pub const fn tracing_level(channel: Channel) -> Level {
        match channel {
            Channel::Verbose => Level::DEBUG,
            Channel::Info => Level::INFO,
            Channel::Warning => Level::WARN,
            Channel::Error => Level::ERROR,
        }
    }
}

impl Backend for TracingBackend {
    fn emit(&self, logger: &Logger, dispatch: Dispatch, message: &str) {
        let component = logger.name();
        let sub_level = dispatch.sub_level();
        // Event levels must be constants, hence one arm per level.
        match Self::tracing_level(dispatch.channel()) {
            Level::ERROR => {
                tracing::error!(target: TRACING_TARGET, component, sub_level, "{message}");
            }
            Level::WARN => {
                tracing::warn!(target: TRACING_TARGET, component, sub_level, "{message}");
            }
            Level::INFO => {
                tracing::info!(target: TRACING_TARGET, component, sub_level, "{message}");
            }
            Level::DEBUG => {
                tracing::debug!(target: TRACING_TARGET, component, sub_level, "{message}");
            }
            _ => {
                tracing::trace!(target: TRACING_TARGET, component, sub_level, "{message}");
            }
        }
    }
}

/// Builds a registry whose loggers forward to `tracing`.
///
/// The registry still owns a standard-error [`Sink`] so that lock binding via
/// [`Registry::initialize`] keeps working.
#[must_use]
pub fn tracing_registry() -> Registry {
    Registry::with_backend(Arc::new(Sink::new()), Arc::new(TracingBackend))
}

/// Installs a tracing-backed global registry at `level`, plus a stderr fmt subscriber.
///
/// Fails, handing the new registry back, when the global registry already
/// exists. An already installed global subscriber is kept.
pub fn init_tracing(level: SeverityLevel) -> Result<&'static Registry, Registry> {
    let registry = tracing_registry();
    registry.set_all_levels(level);
    let registry = Registry::install(registry)?;

    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::TRACE)
        .try_init();

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentId;
    use std::fmt;
    use std::sync::Mutex;
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Debug, Default, PartialEq, Eq)]
    struct Captured {
        level: Option<Level>,
        target: String,
        component: String,
        sub_level: u64,
        message: String,
    }

    impl Visit for Captured {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "component" {
                self.component = value.to_owned();
            }
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            if field.name() == "sub_level" {
                self.sub_level = value;
            }
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.message = format!("{value:?}");
            }
        }
    }

    #[derive(Clone, Default)]
    struct Collector {
        events: Arc<Mutex<Vec<Captured>>>,
    }

    impl<S: tracing::Subscriber> Layer<S> for Collector {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut captured = Captured {
                level: Some(*event.metadata().level()),
                target: event.metadata().target().to_owned(),
                ..Captured::default()
            };
            event.record(&mut captured);
            self.events.lock().expect("events").push(captured);
        }
    }

    fn capture(run: impl FnOnce(&Registry)) -> Vec<Captured> {
        let collector = Collector::default();
        let subscriber = tracing_subscriber::registry().with(collector.clone());
        let registry = tracing_registry();
        tracing::subscriber::with_default(subscriber, || run(&registry));
        let mut events = collector.events.lock().expect("events");
        std::mem::take(&mut *events)
    }

    #[test]
    fn channels_map_to_tracing_levels() {
        assert_eq!(TracingBackend::tracing_level(Channel::Verbose), Level::DEBUG);
        assert_eq!(TracingBackend::tracing_level(Channel::Info), Level::INFO);
        assert_eq!(TracingBackend::tracing_level(Channel::Warning), Level::WARN);
        assert_eq!(TracingBackend::tracing_level(Channel::Error), Level::ERROR);
    }

    #[test]
    fn forwards_component_and_message() {
        let events = capture(|registry| {
            let logger = registry.logger(ComponentId::Router);
            logger.log(SeverityLevel::Warning, format_args!("no healthy upstream"));
        });

        assert_eq!(
            events,
            [Captured {
                level: Some(Level::WARN),
                target: TRACING_TARGET.to_owned(),
                component: "router".to_owned(),
                sub_level: 0,
                message: "no healthy upstream".to_owned(),
            }]
        );
    }

    #[test]
    fn sub_level_separates_shared_channels() {
        let events = capture(|registry| {
            let logger = registry.logger(ComponentId::Pool);
            logger.set_level(SeverityLevel::Trace);
            logger.log(SeverityLevel::Trace, format_args!("t"));
            logger.log(SeverityLevel::Debug, format_args!("d"));
            logger.log(SeverityLevel::Fatal, format_args!("f"));
        });

        let summary: Vec<_> = events
            .iter()
            .map(|event| (event.level, event.sub_level))
            .collect();
        assert_eq!(
            summary,
            [
                (Some(Level::DEBUG), 2),
                (Some(Level::DEBUG), 1),
                (Some(Level::ERROR), 1)
            ]
        );
    }

    #[test]
    fn event_levels_follow_channel_mapping() {
        let events = capture(|registry| {
            let logger = registry.logger(ComponentId::Admin);
            logger.set_level(SeverityLevel::Trace);
            for level in SeverityLevel::ALL {
                logger.log(level, format_args!("{level}"));
            }
        });

        let levels: Vec<_> = events.iter().map(|event| event.level).collect();
        let expected: Vec<_> = SeverityLevel::ALL
            .iter()
            .map(|&level| Dispatch::for_level(level).channel())
            .map(|channel| Some(TracingBackend::tracing_level(channel)))
            .collect();
        assert_eq!(levels, expected);
    }

    #[test]
    fn threshold_still_filters() {
        let events = capture(|registry| {
            let logger = registry.logger(ComponentId::Http);
            logger.log(SeverityLevel::Debug, format_args!("dropped"));
        });
        assert!(events.is_empty());
    }
}
