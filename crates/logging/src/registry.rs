//! crates/logging/src/registry.rs
//! Owner of every component logger and the shared sink.

use std::fmt;
use std::sync::{Arc, OnceLock};

use logging_sink::{BasicLockable, Sink};

use crate::backend::{Backend, SinkBackend};
use crate::component::ComponentId;
use crate::levels::SeverityLevel;
use crate::logger::Logger;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Exactly one [`Logger`] per [`ComponentId`] plus the [`Sink`] they share.
///
/// Registries can be built directly (tests, embedded uses), but the process
/// normally works through the single global one returned by
/// [`Registry::global`], which is built on first access. Loggers are stored in
/// [`ComponentId::ALL`] order and never move or disappear.
///
/// ```
/// use logging::{ComponentId, Registry, SeverityLevel, ThreadLock};
///
/// static LOCK: ThreadLock = ThreadLock::new();
///
/// let registry = Registry::new();
/// registry.initialize(SeverityLevel::Warning, &LOCK);
///
/// assert!(registry.sink().has_lock());
/// assert!(registry.loggers().iter().all(|logger| logger.level() == SeverityLevel::Warning));
/// assert_eq!(registry.logger(ComponentId::Admin).name(), "admin");
/// ```
pub struct Registry {
    loggers: Box<[Logger]>,
    sink: Arc<Sink>,
}

impl Registry {
    /// Builds a registry writing to standard error through an unlocked sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Sink::new())
    }

    /// Builds a registry whose loggers write through `sink`.
    #[must_use]
    pub fn with_sink(sink: Sink) -> Self {
        let sink = Arc::new(sink);
        let backend = Arc::new(SinkBackend::new(Arc::clone(&sink)));
        Self::with_backend(sink, backend)
    }

    /// Builds a registry whose loggers dispatch through `backend`.
    ///
    /// `sink` is still the registry's shared sink: [`initialize`](Self::initialize)
    /// binds the lock to it and [`sink`](Self::sink) returns it, whether or not
    /// `backend` writes there.
    #[must_use]
    pub fn with_backend(sink: Arc<Sink>, backend: Arc<dyn Backend>) -> Self {
        let loggers = ComponentId::ALL
            .iter()
            .map(|&id| Logger::new(id, SeverityLevel::default(), Arc::clone(&backend)))
            .collect();
        Self { loggers, sink }
    }

    /// Returns the process-wide registry, building the default one on first use.
    ///
    /// Concurrent first calls build it exactly once; every caller sees the same
    /// fully populated registry.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Makes `registry` the process-wide registry.
    ///
    /// Fails, handing `registry` back, when the global registry already exists
    /// (because of an earlier install or an earlier [`global`](Self::global) call).
    pub fn install(registry: Self) -> Result<&'static Self, Self> {
        GLOBAL.set(registry)?;
        Ok(Self::global())
    }

    /// Returns the logger for `id`.
    #[must_use]
    pub fn logger(&self, id: ComponentId) -> &Logger {
        &self.loggers[id.index()]
    }

    /// Returns the shared sink.
    #[must_use]
    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Returns every logger in [`ComponentId`] declaration order.
    #[must_use]
    pub fn loggers(&self) -> &[Logger] {
        &self.loggers
    }

    /// Startup configuration: binds `lock` to the sink and sets every threshold to `level`.
    ///
    /// Meant to run once, before worker threads start logging. Calling it again
    /// overwrites both settings; statements racing with the call observe
    /// either the old or the new lock binding, never a mix.
    pub fn initialize(&self, level: SeverityLevel, lock: &'static dyn BasicLockable) {
        self.sink.set_lock(lock);
        self.set_all_levels(level);
    }

    /// Sets every logger's threshold without touching the sink.
    pub fn set_all_levels(&self, level: SeverityLevel) {
        for logger in self.loggers.iter() {
            logger.set_level(level);
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.loggers)
            .field("sink", &self.sink)
            .finish()
    }
}

/// Returns the global logger for `id`.
pub fn get_logger(id: ComponentId) -> &'static Logger {
    Registry::global().logger(id)
}

/// Returns the global shared sink.
pub fn get_sink() -> &'static Sink {
    Registry::global().sink()
}

/// Returns every global logger in [`ComponentId`] declaration order.
pub fn loggers() -> &'static [Logger] {
    Registry::global().loggers()
}

/// Startup entry point: see [`Registry::initialize`].
pub fn initialize(level: SeverityLevel, lock: &'static dyn BasicLockable) {
    Registry::global().initialize(level, lock);
}
