use vh_core::Identity;

use serde::Serialize;

/// Whether a session currently has an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    Unauthenticated,
    Authenticated,
}

impl AuthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated => "authenticated",
        }
    }
}

impl std::fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot published by [`SessionStore`](crate::SessionStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct SessionState {
    pub identity: Option<Identity>,
    /// True while restoring at startup and while a login/register runs
    pub loading: bool,
    /// Message from the last failed login/register
    pub error: Option<String>,
}

impl SessionState {
    /// State before `restore()` has run.
    pub fn initial() -> Self {
        Self {
            identity: None,
            loading: true,
            error: None,
        }
    }

    pub fn status(&self) -> AuthStatus {
        if self.identity.is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}
