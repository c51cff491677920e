//! Authorization code queue

use crate::core::nonce::{NonceSource, OsNonceSource};
use crate::core::sync::lock_recovering;
use crate::queue::error::QueueResult;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Length of codes generated when no fixture code is queued
pub const CODE_LENGTH: usize = 24;

/// Codes returned by successive authorize calls
///
/// An empty queue behaves like a real server and issues a fresh random code.
pub struct CodeQueue {
    queue: Mutex<VecDeque<String>>,
    nonce_source: Arc<dyn NonceSource>,
}

impl CodeQueue {
    pub fn new() -> Self {
        Self::with_nonce_source(Arc::new(OsNonceSource))
    }

    pub fn with_nonce_source(nonce_source: Arc<dyn NonceSource>) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            nonce_source,
        }
    }

    /// Queue a code for a subsequent authorize call
    pub fn push(&self, code: impl Into<String>) {
        let mut queue = lock_recovering(&self.queue, "code queue");
        queue.push_back(code.into());
        log::trace!("code queue: push (depth {})", queue.len());
    }

    /// Take the next queued code, or generate a random one
    ///
    /// Generation runs under the queue lock. A random source failure is
    /// returned as is and not retried.
    pub fn pop(&self) -> QueueResult<String> {
        let mut queue = lock_recovering(&self.queue, "code queue");
        if let Some(code) = queue.pop_front() {
            log::trace!("code queue: pop (depth {})", queue.len());
            return Ok(code);
        }

        log::debug!("code queue empty, generating random code");
        Ok(self.nonce_source.random_nonce(CODE_LENGTH)?)
    }

    pub fn len(&self) -> usize {
        lock_recovering(&self.queue, "code queue").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CodeQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CodeQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeQueue")
            .field("queue", &*lock_recovering(&self.queue, "code queue"))
            .finish_non_exhaustive()
    }
}
