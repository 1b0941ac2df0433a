use std::env;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    User,
    Doctor,
}

impl UserType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Some(UserType::User),
            "doctor" => Some(UserType::Doctor),
            _ => None,
        }
    }
}

/// Read-only view of the signed-in identity.
///
/// Set and clear belong to the auth flow; everything in this workspace only
/// reads through this trait so tests can hand in fixtures.
pub trait SessionStore: Send + Sync {
    fn auth_token(&self) -> Option<String>;
    fn user_type(&self) -> Option<UserType>;
    fn current_user_id(&self) -> Option<String>;
    fn name(&self) -> Option<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub auth_token: Option<String>,
    pub user_type: Option<UserType>,
    pub user_id: Option<String>,
    pub name: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn patient(user_id: &str, auth_token: &str) -> Self {
        Self {
            auth_token: Some(auth_token.to_string()),
            user_type: Some(UserType::User),
            user_id: Some(user_id.to_string()),
            name: None,
        }
    }

    pub fn doctor(user_id: &str, auth_token: &str) -> Self {
        Self {
            user_type: Some(UserType::Doctor),
            ..Self::patient(user_id, auth_token)
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Builds a session from the `CLINIC_*` variables mirroring the
    /// `authToken`, `userType`, `userId` and `name` keys.
    pub fn from_env() -> Self {
        let read = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());

        let session = Self {
            auth_token: read("CLINIC_AUTH_TOKEN"),
            user_type: read("CLINIC_USER_TYPE").and_then(|v| UserType::parse(&v)),
            user_id: read("CLINIC_USER_ID"),
            name: read("CLINIC_USER_NAME"),
        };

        debug!(
            "Session loaded from env (authenticated: {}, user type: {:?})",
            session.is_authenticated(),
            session.user_type
        );

        session
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some() && self.user_id.is_some()
    }
}

impl SessionStore for Session {
    fn auth_token(&self) -> Option<String> {
        self.auth_token.clone()
    }

    fn user_type(&self) -> Option<UserType> {
        self.user_type
    }

    fn current_user_id(&self) -> Option<String> {
        self.user_id.clone()
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }
}
