//! Authorization code queue tests
//!
//! Queued codes come back in order; an empty queue generates a random code
//! of the fixed length or reports the random source failure.

#[cfg(test)]
mod tests {
    use crate::queue::api::{CodeQueue, NonceError, QueueError, CODE_LENGTH};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn failing_source() -> Arc<dyn crate::queue::api::NonceSource> {
        Arc::new(|_: usize| -> Result<String, NonceError> {
            Err(NonceError::Unavailable {
                message: "entropy exhausted".to_string(),
            })
        })
    }

    #[test]
    fn test_code_queue_fifo_then_random() {
        let queue = CodeQueue::new();
        queue.push("code-1");
        queue.push("code-2".to_string());

        assert_eq!(queue.pop().unwrap(), "code-1");
        assert_eq!(queue.pop().unwrap(), "code-2");

        let generated = queue.pop().unwrap();
        assert_eq!(generated.len(), CODE_LENGTH);
        assert!(generated.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_random_codes_are_fresh() {
        let queue = CodeQueue::new();
        let first = queue.pop().unwrap();
        let second = queue.pop().unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_random_source_failure_propagates() {
        let queue = CodeQueue::with_nonce_source(failing_source());

        let err = queue.pop().unwrap_err();
        match &err {
            QueueError::RandomSource(NonceError::Unavailable { message }) => {
                assert_eq!(message, "entropy exhausted");
            }
        }
        // Transparent: the caller sees the source's own message
        assert_eq!(err.to_string(), "Random source unavailable: entropy exhausted");
    }

    #[test]
    fn test_queued_codes_bypass_failing_source() {
        let queue = CodeQueue::with_nonce_source(failing_source());
        queue.push("fixture");

        assert_eq!(queue.pop().unwrap(), "fixture");
        assert!(queue.pop().is_err());
        // Failure leaves the queue usable
        queue.push("after-failure");
        assert_eq!(queue.pop().unwrap(), "after-failure");
    }

    #[test]
    fn test_source_called_with_code_length_only_when_empty() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let queue = CodeQueue::with_nonce_source(Arc::new(
            move |length: usize| -> Result<String, NonceError> {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok("r".repeat(length))
            },
        ));

        queue.push("queued");
        assert_eq!(queue.pop().unwrap(), "queued");
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(queue.pop().unwrap(), "r".repeat(CODE_LENGTH));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
