//! Generic error handling utilities
//!
//! Lets harness code report fixture failures uniformly, whether the failure
//! is something the test author can fix (a malformed fixture script) or a
//! system condition (the OS random source being unavailable).

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; otherwise it returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if the error carries a message the test author can act on
    ///
    /// Examples of user-actionable errors:
    /// - Fixture script syntax errors
    /// - Unknown keys in a fixture script
    ///
    /// Examples of system errors:
    /// - IO failures reading a script
    /// - Random source failures while generating a fallback code
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors are logged with their own message; system errors
/// are logged with `operation_context` and their details go to debug level.
///
/// # Examples
/// ```rust,no_run
/// # use mockoidc::core::error_handling::log_error_with_context;
/// # use mockoidc::fixtures::FixtureConfig;
/// if let Err(e) = FixtureConfig::from_toml_str("codes = 42") {
///     log_error_with_context(&e, "Loading fixture script");
/// }
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => {
            log::error!("{}: {}", operation_context, user_msg);
        }
        _ => log::error!("{} failed", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nonce::NonceError;
    use crate::fixtures::{ConfigError, FixtureConfig};
    use crate::queue::QueueError;

    #[test]
    fn test_parse_error_is_user_actionable() {
        let error = FixtureConfig::from_toml_str("codes = 42").unwrap_err();

        assert!(matches!(error, ConfigError::Parse { .. }));
        assert!(error.is_user_actionable());
        assert!(error.user_message().is_some());
        log_error_with_context(&error, "Loading fixture script");
    }

    #[test]
    fn test_random_source_error_is_system_error() {
        let error = QueueError::from(NonceError::Unavailable {
            message: "entropy exhausted".to_string(),
        });

        assert!(!error.is_user_actionable());
        assert_eq!(error.user_message(), None);
        log_error_with_context(&error, "Popping authorization code");
    }
}
