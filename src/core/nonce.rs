//! Random nonce generation
//!
//! Authorization codes issued when no fixture code is queued come from a
//! [`NonceSource`]. The stock source seeds a generator from the
//! operating-system RNG and samples `[a-zA-Z0-9]` uniformly.

use rand::distr::{Alphanumeric, SampleString};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, thiserror::Error)]
pub enum NonceError {
    #[error("Random source unavailable: {message}")]
    Unavailable { message: String },
}

/// Supplier of random strings of a requested length
///
/// Implementations are called while a queue lock is held, so they must be
/// fast and must not block. Closures of the matching shape implement this
/// trait, which is how tests inject failing sources.
pub trait NonceSource: Send + Sync {
    fn random_nonce(&self, length: usize) -> Result<String, NonceError>;
}

impl<F> NonceSource for F
where
    F: Fn(usize) -> Result<String, NonceError> + Send + Sync,
{
    fn random_nonce(&self, length: usize) -> Result<String, NonceError> {
        self(length)
    }
}

/// Nonce source backed by the operating-system RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn random_nonce(&self, length: usize) -> Result<String, NonceError> {
        random_nonce(length)
    }
}

/// Generate `length` alphanumeric characters seeded from the OS RNG
///
/// Fails only when the OS RNG cannot provide a seed.
pub fn random_nonce(length: usize) -> Result<String, NonceError> {
    let mut rng = StdRng::try_from_os_rng().map_err(|e| NonceError::Unavailable {
        message: e.to_string(),
    })?;

    Ok(Alphanumeric.sample_string(&mut rng, length))
}
