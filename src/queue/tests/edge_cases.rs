//! Edge case tests for the fixture queues
//!
//! Lock poisoning by panicking collaborators, fallbacks that must not touch
//! queue state, and large fixture volumes.

#[cfg(test)]
mod tests {
    use crate::queue::api::{
        CodeQueue, ErrorQueue, MockUser, NonceError, ServerError, SpecialUserQueue, User,
        UserQueue,
    };
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_user_queue_survives_panicking_factory() {
        let armed = Arc::new(AtomicBool::new(true));
        let trigger = Arc::clone(&armed);
        let factory = move || -> Box<dyn User> {
            if trigger.swap(false, Ordering::SeqCst) {
                panic!("factory failure");
            }
            Box::new(MockUser::with_subject("recovered-default"))
        };
        let queue = UserQueue::with_factory(Arc::new(factory));

        // First fallback panics while the lock is held
        let result = catch_unwind(AssertUnwindSafe(|| queue.pop()));
        assert!(result.is_err());

        queue.push(Box::new(MockUser::with_subject("after-panic")));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop().id(), "after-panic");
        assert_eq!(queue.pop().id(), "recovered-default");
    }

    #[test]
    fn test_code_queue_survives_panicking_source() {
        let queue = CodeQueue::with_nonce_source(Arc::new(
            |_: usize| -> Result<String, NonceError> { panic!("rng panicked") },
        ));

        assert!(catch_unwind(AssertUnwindSafe(|| queue.pop())).is_err());

        queue.push("still-works");
        assert_eq!(queue.pop().unwrap(), "still-works");
    }

    #[test]
    fn test_special_queue_survives_panicking_factory() {
        let queue = SpecialUserQueue::with_factory(Arc::new(|| -> Box<dyn User> {
            panic!("no default")
        }));
        queue.push("idp", Box::new(MockUser::with_subject("first")));
        assert_eq!(queue.pop("idp").id(), "first");

        assert!(catch_unwind(AssertUnwindSafe(|| queue.pop("idp"))).is_err());
        assert_eq!(queue.idps_exhausted_with_users(), vec!["idp".to_string()]);
    }

    #[test]
    fn test_fallbacks_leave_queues_empty() {
        let users = UserQueue::new();
        let codes = CodeQueue::new();
        let errors = ErrorQueue::new();

        for _ in 0..5 {
            users.pop();
            codes.pop().unwrap();
            errors.pop();
        }

        assert!(users.is_empty());
        assert!(codes.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_large_fixture_volume() {
        let errors = ErrorQueue::new();
        for i in 0..10_000u16 {
            errors.push(ServerError::new(500, format!("e{}", i), ""));
        }
        assert_eq!(errors.len(), 10_000);

        for i in 0..10_000u16 {
            assert_eq!(errors.pop().unwrap().error, format!("e{}", i));
        }
        assert!(errors.pop().is_none());
    }

    #[test]
    fn test_empty_string_code_is_a_fixture() {
        let codes = CodeQueue::new();
        codes.push("");

        // A queued empty code is returned as-is, not replaced by a random one
        assert_eq!(codes.pop().unwrap(), "");
    }
}
