//! Fixture queues for scripting a mock OIDC authentication server
//!
//! Tests push users, authorization codes and errors; request handlers pop
//! them in order and get a defined fallback once a queue is empty.

pub mod core;
pub mod fixtures;
pub mod queue;
pub mod user;

pub use fixtures::{FixtureConfig, MockFixtures};
pub use queue::{CodeQueue, ErrorQueue, ServerError, SpecialUserQueue, UserQueue};
pub use user::{DefaultUser, MockUser, User};
