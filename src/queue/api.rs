//! Public API for the queue system
//!
//! Request-handling code should import from here rather than from the
//! individual queue modules.

// Queues
pub use crate::queue::code::{CodeQueue, CODE_LENGTH};
pub use crate::queue::server_error::{ErrorQueue, ServerError};
pub use crate::queue::special::{IdpState, SpecialUserQueue};
pub use crate::queue::user::UserQueue;

// Collaborators consulted on empty queues
pub use crate::core::nonce::{NonceError, NonceSource, OsNonceSource};
pub use crate::user::{DefaultUser, MockUser, User, UserFactory};

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};
