//! Queue Error Types

use crate::core::error_handling::ContextualError;
use crate::core::nonce::NonceError;

/// Failures surfaced by queue operations
///
/// Exhaustion is never an error; the only failing path is the code queue's
/// random fallback.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error(transparent)]
    RandomSource(#[from] NonceError),
}

impl ContextualError for QueueError {
    fn is_user_actionable(&self) -> bool {
        false
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
