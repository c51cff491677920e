//! Common test utilities and helpers
//!
//! A minimal authorize handler built on `MockFixtures`, the way a mock
//! server's request layer consumes the queues.

use mockoidc::queue::{QueueResult, ServerError};
use mockoidc::MockFixtures;

/// What one simulated authorize request produced
#[derive(Debug)]
pub enum AuthorizeOutcome {
    Granted { subject: String, code: String },
    Failed(ServerError),
}

/// Serve one authorize request for `idp`, or from the global user queue
pub fn authorize(fixtures: &MockFixtures, idp: Option<&str>) -> QueueResult<AuthorizeOutcome> {
    if let Some(server_error) = fixtures.errors.pop() {
        return Ok(AuthorizeOutcome::Failed(server_error));
    }

    let user = match idp {
        Some(idp) => fixtures.special_users.pop(idp),
        None => fixtures.users.pop(),
    };
    let code = fixtures.codes.pop()?;

    Ok(AuthorizeOutcome::Granted {
        subject: user.id(),
        code,
    })
}

/// Write `contents` to a fixture script inside `dir`
pub fn write_script(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("fixtures.toml");
    std::fs::write(&path, contents).expect("Failed to write fixture script");
    path
}
