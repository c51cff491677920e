//! User fixtures
//!
//! The queues treat users as opaque [`User`] trait objects. [`MockUser`] is
//! the stock fixture type, and [`DefaultUser`] is the factory the queues fall
//! back to when nothing is queued.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// An authenticated identity handed out by the mock server
pub trait User: fmt::Debug + Send + Sync {
    /// Subject identifier (`sub` claim)
    fn id(&self) -> String;

    /// JSON userinfo document limited to the claims `scope` grants
    fn userinfo(&self, scope: &[&str]) -> serde_json::Result<Vec<u8>>;
}

/// Produces the user returned when a user queue has nothing queued
///
/// Must be infallible and free of side effects. Closures returning a boxed
/// [`User`] implement this trait.
pub trait UserFactory: Send + Sync {
    fn default_user(&self) -> Box<dyn User>;
}

impl<F> UserFactory for F
where
    F: Fn() -> Box<dyn User> + Send + Sync,
{
    fn default_user(&self) -> Box<dyn User> {
        self()
    }
}

/// Factory returning `MockUser::default()`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUser;

impl UserFactory for DefaultUser {
    fn default_user(&self) -> Box<dyn User> {
        Box::new(MockUser::default())
    }
}

/// Stock user fixture
///
/// Only `subject` is required when deserializing; every other field falls
/// back to its empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MockUser {
    pub subject: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub preferred_username: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl MockUser {
    /// User with only a subject set
    pub fn with_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            email: String::new(),
            email_verified: false,
            preferred_username: String::new(),
            phone: String::new(),
            address: String::new(),
            groups: Vec::new(),
        }
    }

    /// Claims granted by `scope`, keyed by OIDC claim name
    pub fn claims(&self, scope: &[&str]) -> Map<String, Value> {
        let mut claims = Map::new();
        for s in scope {
            match *s {
                "openid" => {
                    claims.insert("sub".into(), Value::from(self.subject.clone()));
                }
                "email" => {
                    claims.insert("email".into(), Value::from(self.email.clone()));
                    claims.insert("email_verified".into(), Value::from(self.email_verified));
                }
                "profile" => {
                    claims.insert(
                        "preferred_username".into(),
                        Value::from(self.preferred_username.clone()),
                    );
                }
                "phone" => {
                    claims.insert("phone_number".into(), Value::from(self.phone.clone()));
                }
                "address" => {
                    claims.insert("address".into(), Value::from(self.address.clone()));
                }
                "groups" => {
                    claims.insert("groups".into(), Value::from(self.groups.clone()));
                }
                _ => {}
            }
        }
        claims
    }
}

impl Default for MockUser {
    fn default() -> Self {
        Self {
            subject: "1234567890".to_string(),
            email: "jane.doe@example.com".to_string(),
            email_verified: true,
            preferred_username: "jane.doe".to_string(),
            phone: "555-987-6543".to_string(),
            address: "123 Main Street".to_string(),
            groups: vec!["engineering".to_string(), "design".to_string()],
        }
    }
}

impl User for MockUser {
    fn id(&self) -> String {
        self.subject.clone()
    }

    fn userinfo(&self, scope: &[&str]) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.claims(scope))
    }
}
