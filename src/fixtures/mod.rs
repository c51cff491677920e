//! Per-server fixture state
//!
//! [`MockFixtures`] owns one instance of every queue. Each mock server keeps
//! its own `MockFixtures` and passes it by reference to its handlers, so
//! several mock servers can run in one process without sharing fixtures.

mod config;
mod error;

pub use config::{FixtureConfig, ProviderFixtures};
pub use error::{ConfigError, ConfigResult};

use crate::core::nonce::{NonceSource, OsNonceSource};
use crate::queue::{CodeQueue, ErrorQueue, SpecialUserQueue, UserQueue};
use crate::user::{DefaultUser, UserFactory};
use std::sync::Arc;

#[derive(Debug)]
pub struct MockFixtures {
    pub users: UserQueue,
    pub special_users: SpecialUserQueue,
    pub codes: CodeQueue,
    pub errors: ErrorQueue,
}

impl MockFixtures {
    /// Empty queues using the stock default user and OS random source
    pub fn new() -> Self {
        Self::with_collaborators(Arc::new(DefaultUser), Arc::new(OsNonceSource))
    }

    /// Empty queues consulting `default_user` and `nonce_source` when empty
    pub fn with_collaborators(
        default_user: Arc<dyn UserFactory>,
        nonce_source: Arc<dyn NonceSource>,
    ) -> Self {
        Self {
            users: UserQueue::with_factory(Arc::clone(&default_user)),
            special_users: SpecialUserQueue::with_factory(default_user),
            codes: CodeQueue::with_nonce_source(nonce_source),
            errors: ErrorQueue::new(),
        }
    }

    /// Fresh fixtures seeded from a script, using the stock collaborators
    pub fn from_config(config: &FixtureConfig) -> Self {
        Self::from_config_with(config, Arc::new(DefaultUser), Arc::new(OsNonceSource))
    }

    /// Fresh fixtures seeded from a script, consulting the given collaborators
    /// once the seeded fixtures run out
    pub fn from_config_with(
        config: &FixtureConfig,
        default_user: Arc<dyn UserFactory>,
        nonce_source: Arc<dyn NonceSource>,
    ) -> Self {
        let fixtures = Self::with_collaborators(default_user, nonce_source);
        fixtures.seed(config);
        fixtures
    }

    /// Push every fixture in `config` onto the existing queues
    ///
    /// Fixtures are pushed in script order, providers in key order. A
    /// provider listed with no users is not pushed to and stays unconfigured.
    pub fn seed(&self, config: &FixtureConfig) {
        for user in &config.users {
            self.users.push(Box::new(user.clone()));
        }
        for code in &config.codes {
            self.codes.push(code.as_str());
        }
        for server_error in &config.errors {
            self.errors.push(server_error.clone());
        }
        for (idp, provider) in &config.providers {
            for user in &provider.users {
                self.special_users.push(idp, Box::new(user.clone()));
            }
        }

        log::debug!(
            "seeded fixtures: {} users, {} codes, {} errors, {} providers",
            config.users.len(),
            config.codes.len(),
            config.errors.len(),
            config.providers.len()
        );
    }
}

impl Default for MockFixtures {
    fn default() -> Self {
        Self::new()
    }
}
