//! Injected handler errors

use crate::core::sync::lock_recovering;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Tester-defined error for a handler to return instead of proceeding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(deny_unknown_fields)]
#[error("{error} ({code}): {description}")]
pub struct ServerError {
    /// HTTP status code
    pub code: u16,
    /// OAuth error code, e.g. `invalid_request`
    pub error: String,
    #[serde(default)]
    pub description: String,
}

impl ServerError {
    pub fn new(code: u16, error: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code,
            error: error.into(),
            description: description.into(),
        }
    }
}

/// Errors for the next handler invocations, oldest first
#[derive(Debug, Default)]
pub struct ErrorQueue {
    queue: Mutex<VecDeque<ServerError>>,
}

impl ErrorQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, server_error: ServerError) {
        let mut queue = lock_recovering(&self.queue, "error queue");
        log::trace!("error queue: push {}", server_error);
        queue.push_back(server_error);
    }

    /// Next injected error; `None` means proceed normally
    pub fn pop(&self) -> Option<ServerError> {
        let server_error = lock_recovering(&self.queue, "error queue").pop_front();
        if let Some(se) = &server_error {
            log::trace!("error queue: pop {}", se);
        }
        server_error
    }

    pub fn len(&self) -> usize {
        lock_recovering(&self.queue, "error queue").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
