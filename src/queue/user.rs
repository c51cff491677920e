//! Single-provider user queue

use crate::core::sync::lock_recovering;
use crate::user::{DefaultUser, User, UserFactory};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Users returned by successive calls to the authorize endpoint
pub struct UserQueue {
    queue: Mutex<VecDeque<Box<dyn User>>>,
    default_user: Arc<dyn UserFactory>,
}

impl UserQueue {
    /// Empty queue falling back to [`DefaultUser`]
    pub fn new() -> Self {
        Self::with_factory(Arc::new(DefaultUser))
    }

    /// Empty queue falling back to users built by `factory`
    pub fn with_factory(factory: Arc<dyn UserFactory>) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            default_user: factory,
        }
    }

    /// Queue a user for a subsequent authorize call
    pub fn push(&self, user: Box<dyn User>) {
        let mut queue = lock_recovering(&self.queue, "user queue");
        queue.push_back(user);
        log::trace!("user queue: push (depth {})", queue.len());
    }

    /// Take the next queued user, or the default user when none is queued
    pub fn pop(&self) -> Box<dyn User> {
        let mut queue = lock_recovering(&self.queue, "user queue");
        match queue.pop_front() {
            Some(user) => {
                log::trace!("user queue: pop (depth {})", queue.len());
                user
            }
            None => {
                log::debug!("user queue empty, returning default user");
                self.default_user.default_user()
            }
        }
    }

    pub fn len(&self) -> usize {
        lock_recovering(&self.queue, "user queue").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UserQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserQueue")
            .field("queue", &*lock_recovering(&self.queue, "user queue"))
            .finish_non_exhaustive()
    }
}
