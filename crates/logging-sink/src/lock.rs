//! crates/logging-sink/src/lock.rs
//! Lockable capability injected into the shared sink at startup.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// A lock that is acquired and released explicitly rather than through a guard value.
///
/// The sink only borrows implementations of this trait; their lifetime is
/// managed by whoever created them (typically process startup code that shares
/// one lock between the sink and other writers of the error stream). Every
/// successful [`lock`](Self::lock) or [`try_lock`](Self::try_lock) must be
/// paired with exactly one [`unlock`](Self::unlock); use
/// [`LockGuard`](crate::LockGuard) to get that pairing on every exit path.
pub trait BasicLockable: Send + Sync {
    /// Blocks the calling thread until it holds the lock.
    fn lock(&self);

    /// Acquires the lock if it is free, returning whether it was acquired.
    fn try_lock(&self) -> bool;

    /// Releases a lock held by the caller.
    fn unlock(&self);
}

/// A blocking [`BasicLockable`] built from a mutex-protected flag and a condition variable.
///
/// The type is `const`-constructible so it can live in a `static` and be
/// handed to [`Sink::set_lock`](crate::Sink::set_lock) as a `&'static` reference.
///
/// ```
/// use logging_sink::{BasicLockable, ThreadLock};
///
/// let lock = ThreadLock::new();
/// assert!(lock.try_lock());
/// assert!(!lock.try_lock());
/// lock.unlock();
/// assert!(!lock.is_locked());
/// ```
#[derive(Debug, Default)]
pub struct ThreadLock {
    held: Mutex<bool>,
    released: Condvar,
}

impl ThreadLock {
    /// Creates an unlocked lock.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            held: Mutex::new(false),
            released: Condvar::new(),
        }
    }

    /// Reports whether some thread currently holds the lock.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        *self.state()
    }

    fn state(&self) -> MutexGuard<'_, bool> {
        self.held.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BasicLockable for ThreadLock {
    fn lock(&self) {
        let mut held = self.state();
        while *held {
            held = self
                .released
                .wait(held)
                .unwrap_or_else(PoisonError::into_inner);
        }
        *held = true;
    }

    fn try_lock(&self) -> bool {
        let mut held = self.state();
        if *held {
            return false;
        }
        *held = true;
        true
    }

    fn unlock(&self) {
        let mut held = self.state();
        *held = false;
        drop(held);
        self.released.notify_one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn new_lock_is_free() {
        let lock = ThreadLock::new();
        assert!(!lock.is_locked());
    }

    #[test]
    fn try_lock_fails_while_held() {
        let lock = ThreadLock::new();
        lock.lock();
        assert!(lock.is_locked());
        assert!(!lock.try_lock());
        lock.unlock();
        assert!(lock.try_lock());
        lock.unlock();
    }

    #[test]
    fn lock_excludes_other_threads() {
        let lock = Arc::new(ThreadLock::new());
        let inside = Arc::new(AtomicUsize::new(0));
        let max_inside = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let lock = Arc::clone(&lock);
                let inside = Arc::clone(&inside);
                let max_inside = Arc::clone(&max_inside);
                thread::spawn(move || {
                    for _ in 0..200 {
                        lock.lock();
                        let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                        max_inside.fetch_max(now, Ordering::SeqCst);
                        inside.fetch_sub(1, Ordering::SeqCst);
                        lock.unlock();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker thread");
        }

        assert_eq!(max_inside.load(Ordering::SeqCst), 1);
        assert!(!lock.is_locked());
    }
}
