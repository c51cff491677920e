//! Synchronization utilities for robust mutex handling
//!
//! Fixture queue operations are infallible, so a poisoned lock cannot be
//! surfaced as an error the way fallible components would. Every queue
//! mutation is a single `VecDeque`/`HashMap` call, which leaves the guarded
//! state consistent even when a collaborator panics while the lock is held,
//! so the guard is recovered and the poisoning is logged.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Acquire `mutex`, recovering the guard if a previous holder panicked
///
/// # Arguments
/// * `mutex` - The mutex guarding a queue's state
/// * `queue_name` - Human-readable queue name used in the warning
///
/// # Examples
/// ```
/// use std::sync::Mutex;
/// use mockoidc::core::sync::lock_recovering;
///
/// let mutex = Mutex::new(vec![1, 2, 3]);
/// let guard = lock_recovering(&mutex, "example");
/// assert_eq!(guard.len(), 3);
/// ```
pub fn lock_recovering<'a, T>(mutex: &'a Mutex<T>, queue_name: &str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|poison_err: PoisonError<MutexGuard<'a, T>>| {
        log::warn!(
            "{} lock poisoned (a panic occurred while holding it); continuing with recovered state",
            queue_name
        );
        poison_err.into_inner()
    })
}
