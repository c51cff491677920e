//! TOML fixture scripts
//!
//! A fixture script lists the users, codes and errors a test wants the mock
//! server to hand out, in order:
//!
//! ```toml
//! codes = ["code-1", "code-2"]
//!
//! [[users]]
//! subject = "alice"
//! email = "alice@example.com"
//!
//! [[errors]]
//! code = 500
//! error = "server_error"
//! description = "upstream failure"
//!
//! [providers.google]
//! users = [{ subject = "g-1" }]
//! ```

use crate::fixtures::error::{ConfigError, ConfigResult};
use crate::queue::ServerError;
use crate::user::MockUser;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureConfig {
    pub users: Vec<MockUser>,
    pub codes: Vec<String>,
    pub errors: Vec<ServerError>,
    /// Users per identity provider key
    pub providers: BTreeMap<String, ProviderFixtures>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderFixtures {
    pub users: Vec<MockUser>,
}

impl FixtureConfig {
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a fixture script from disk
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!(
            "loaded fixture script {} ({} users, {} codes, {} errors, {} providers)",
            path.display(),
            config.users.len(),
            config.codes.len(),
            config.errors.len(),
            config.providers.len()
        );
        Ok(config)
    }
}
