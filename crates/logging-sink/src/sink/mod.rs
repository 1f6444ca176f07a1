use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::format::LineFormat;
use crate::lock::BasicLockable;
use crate::writer::{SinkWriter, StderrWriter};

mod guard;
mod writing;

pub use guard::LockGuard;

/// The optionally locking sink shared by every logger in the process.
///
/// A freshly constructed sink writes to standard error without any lock and
/// uses [`LineFormat::full`]. Startup code binds the process-wide lock through
/// [`set_lock`](Self::set_lock); until then concurrent emissions are
/// unsynchronized.
///
/// ```
/// use logging_sink::{LineFormat, MemoryWriter, Sink};
///
/// let writer = MemoryWriter::new();
/// let sink = Sink::with_writer(writer.clone());
/// sink.set_format(LineFormat::bare());
/// sink.emit("error", "pool", "no healthy upstream");
/// assert_eq!(writer.contents_string(), "[error][pool] no healthy upstream\n");
/// ```
pub struct Sink {
    binding: RwLock<Binding>,
}

/// Everything an emission needs, swapped as a unit so readers never see a
/// half-applied reconfiguration.
#[derive(Clone)]
struct Binding {
    lock: Option<&'static dyn BasicLockable>,
    writer: Arc<dyn SinkWriter>,
    format: LineFormat,
}

impl Sink {
    /// Creates an unlocked sink writing to standard error.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(StderrWriter)
    }

    /// Creates an unlocked sink writing to `writer`.
    #[must_use]
    pub fn with_writer<W>(writer: W) -> Self
    where
        W: SinkWriter + 'static,
    {
        Self {
            binding: RwLock::new(Binding {
                lock: None,
                writer: Arc::new(writer),
                format: LineFormat::default(),
            }),
        }
    }

    /// Binds the lock held for the duration of every subsequent write.
    ///
    /// The sink borrows `lock` for the rest of the process; it never releases
    /// or drops it beyond the per-write acquire/release pairing. Rebinding
    /// replaces the previous lock for emissions that start afterwards.
    pub fn set_lock(&self, lock: &'static dyn BasicLockable) {
        self.binding_mut().lock = Some(lock);
    }

    /// Unbinds the lock; later writes are unsynchronized.
    pub fn clear_lock(&self) {
        self.binding_mut().lock = None;
    }

    /// Reports whether a lock is currently bound.
    #[must_use]
    pub fn has_lock(&self) -> bool {
        self.binding().lock.is_some()
    }

    /// Replaces the destination writer, returning the previous one.
    ///
    /// Emissions already in flight finish on the writer they started with.
    #[must_use = "the returned writer holds output produced before the replacement"]
    pub fn replace_writer(&self, writer: Arc<dyn SinkWriter>) -> Arc<dyn SinkWriter> {
        std::mem::replace(&mut self.binding_mut().writer, writer)
    }

    /// Returns the current [`LineFormat`].
    #[must_use]
    pub fn format(&self) -> LineFormat {
        self.binding().format
    }

    /// Updates the [`LineFormat`] used for subsequent writes.
    pub fn set_format(&self, format: LineFormat) {
        self.binding_mut().format = format;
    }

    fn snapshot(&self) -> Binding {
        self.binding().clone()
    }

    fn binding(&self) -> RwLockReadGuard<'_, Binding> {
        self.binding.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn binding_mut(&self) -> RwLockWriteGuard<'_, Binding> {
        self.binding.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let binding = self.binding();
        f.debug_struct("Sink")
            .field("locked_writes", &binding.lock.is_some())
            .field("format", &binding.format)
            .finish_non_exhaustive()
    }
}
