//! Per-identity-provider user queues
//!
//! Multi-provider flows queue users separately for each identity provider
//! key. A key that was never pushed to has no entry, while a key whose users
//! have all been popped keeps an empty entry. Both fall back to the default
//! user on pop, but only the second is reported by
//! [`SpecialUserQueue::idps_exhausted_with_users`].

use crate::core::sync::lock_recovering;
use crate::user::{DefaultUser, User, UserFactory};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, Mutex};

type UserFixtures = VecDeque<Box<dyn User>>;

/// Observable state of one provider's queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdpState {
    /// Never pushed to
    Unconfigured,
    /// Pushed to at least once and fully drained
    Exhausted,
    /// Users still queued
    Queued(usize),
}

/// Map lookup result, over a shared or exclusive borrow of the sequence
enum IdpLookup<Q> {
    Absent,
    Exhausted,
    /// Always a non-empty sequence
    Queued(Q),
}

impl<Q: Deref<Target = UserFixtures>> IdpLookup<Q> {
    fn of(entry: Option<Q>) -> Self {
        match entry {
            None => IdpLookup::Absent,
            Some(users) if users.is_empty() => IdpLookup::Exhausted,
            Some(users) => IdpLookup::Queued(users),
        }
    }

    fn state(&self) -> IdpState {
        match self {
            IdpLookup::Absent => IdpState::Unconfigured,
            IdpLookup::Exhausted => IdpState::Exhausted,
            IdpLookup::Queued(users) => IdpState::Queued(users.len()),
        }
    }
}

/// User queues keyed by identity provider
///
/// One lock guards the whole map, so operations on different providers
/// serialize with each other and the exhaustion scan sees a consistent
/// snapshot.
pub struct SpecialUserQueue {
    queues: Mutex<HashMap<String, UserFixtures>>,
    default_user: Arc<dyn UserFactory>,
}

impl SpecialUserQueue {
    pub fn new() -> Self {
        Self::with_factory(Arc::new(DefaultUser))
    }

    pub fn with_factory(factory: Arc<dyn UserFactory>) -> Self {
        Self {
            queues: Mutex::new(HashMap::new()),
            default_user: factory,
        }
    }

    /// Queue a user for `idp`, creating the provider's queue if needed
    pub fn push(&self, idp: &str, user: Box<dyn User>) {
        let mut queues = lock_recovering(&self.queues, "special user queue");
        let users = queues.entry(idp.to_string()).or_default();
        users.push_back(user);
        log::trace!("special user queue: push for idp {} (depth {})", idp, users.len());
    }

    /// Take the next user queued for `idp`
    ///
    /// Unconfigured and exhausted providers both yield the default user.
    pub fn pop(&self, idp: &str) -> Box<dyn User> {
        let mut queues = lock_recovering(&self.queues, "special user queue");
        match IdpLookup::of(queues.get_mut(idp)) {
            IdpLookup::Queued(users) => {
                log::trace!("special user queue: pop for idp {} (depth {})", idp, users.len());
                // Queued is never empty, the fallback only satisfies the type
                users
                    .pop_front()
                    .unwrap_or_else(|| self.default_user.default_user())
            }
            IdpLookup::Exhausted => {
                log::debug!("idp {} exhausted, returning default user", idp);
                self.default_user.default_user()
            }
            IdpLookup::Absent => {
                log::debug!("idp {} not configured, returning default user", idp);
                self.default_user.default_user()
            }
        }
    }

    /// Providers that were pushed to and have since been fully drained
    ///
    /// Sorted by key. Providers never pushed to are not included.
    pub fn idps_exhausted_with_users(&self) -> Vec<String> {
        let queues = lock_recovering(&self.queues, "special user queue");
        let mut exhausted: Vec<String> = queues
            .iter()
            .filter_map(|(idp, users)| match IdpLookup::of(Some(users)) {
                IdpLookup::Exhausted => Some(idp.clone()),
                IdpLookup::Absent | IdpLookup::Queued(_) => None,
            })
            .collect();
        exhausted.sort();
        exhausted
    }

    pub fn idp_state(&self, idp: &str) -> IdpState {
        let queues = lock_recovering(&self.queues, "special user queue");
        IdpLookup::of(queues.get(idp)).state()
    }

    /// Number of users queued for `idp`
    pub fn len(&self, idp: &str) -> usize {
        match self.idp_state(idp) {
            IdpState::Queued(n) => n,
            IdpState::Unconfigured | IdpState::Exhausted => 0,
        }
    }
}

impl Default for SpecialUserQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SpecialUserQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecialUserQueue")
            .field("queues", &*lock_recovering(&self.queues, "special user queue"))
            .finish_non_exhaustive()
    }
}
