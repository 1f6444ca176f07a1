use crate::lock::BasicLockable;

/// RAII guard holding a [`BasicLockable`] for a bounded critical section.
///
/// The lock is released when the guard drops, so early returns, `?`
/// propagation, and unwinding out of the guarded code all release it. The sink
/// wraps every line it writes in one of these guards whenever a lock is bound.
///
/// ```
/// use logging_sink::{LockGuard, ThreadLock};
///
/// let lock = ThreadLock::new();
/// {
///     let _guard = LockGuard::acquire(&lock);
///     assert!(lock.is_locked());
///     assert!(LockGuard::try_acquire(&lock).is_none());
/// }
/// assert!(!lock.is_locked());
/// ```
#[must_use = "dropping the guard immediately releases the lock"]
pub struct LockGuard<'a, L: BasicLockable + ?Sized = dyn BasicLockable> {
    lock: &'a L,
}

impl<'a, L: BasicLockable + ?Sized> LockGuard<'a, L> {
    /// Blocks until `lock` is acquired.
    pub fn acquire(lock: &'a L) -> Self {
        lock.lock();
        Self { lock }
    }

    /// Acquires `lock` only if it is free.
    pub fn try_acquire(lock: &'a L) -> Option<Self> {
        lock.try_lock().then(|| Self { lock })
    }
}

impl<L: BasicLockable + ?Sized> Drop for LockGuard<'_, L> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}
