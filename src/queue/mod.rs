//! Fixture Queue Component
//!
//! Thread-safe FIFO queues that script what a mock OIDC server hands out on
//! successive requests. Tests push fixtures during setup; request handlers
//! pop them while serving.
//!
//! # Overview
//!
//! - **UserQueue**: users for the authorize endpoint, falling back to the
//!   default user
//! - **SpecialUserQueue**: the same, partitioned by identity provider key
//! - **CodeQueue**: authorization codes, falling back to a random
//!   [`CODE_LENGTH`]-character code
//! - **ErrorQueue**: injected [`ServerError`]s, falling back to `None`
//!
//! Each queue owns a single mutex for its whole state. Queues never block
//! waiting for elements and are unbounded.
//!
//! ```text
//!   test setup                         request handlers
//! ┌────────────┐  push   ┌─────────────────────┐  pop   ┌────────────┐
//! │  fixtures  │ ──────▶ │ Mutex<VecDeque<T>>  │ ─────▶ │  handler   │
//! └────────────┘         └─────────────────────┘        └────────────┘
//!                                    │ empty
//!                                    ▼
//!                  default user / random code / no error
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use mockoidc::queue::{CodeQueue, UserQueue, CODE_LENGTH};
//! use mockoidc::user::MockUser;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let users = UserQueue::new();
//! users.push(Box::new(MockUser::with_subject("alice")));
//!
//! assert_eq!(users.pop().id(), "alice");
//! assert_eq!(users.pop().id(), "1234567890"); // default user
//!
//! let codes = CodeQueue::new();
//! codes.push("fixed-code");
//! assert_eq!(codes.pop()?, "fixed-code");
//! assert_eq!(codes.pop()?.len(), CODE_LENGTH);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod code;
mod error;
mod server_error;
mod special;
mod user;

pub mod api;

pub use code::{CodeQueue, CODE_LENGTH};
pub use error::{QueueError, QueueResult};
pub use server_error::{ErrorQueue, ServerError};
pub use special::{IdpState, SpecialUserQueue};
pub use user::UserQueue;

#[cfg(test)]
mod tests;
