//! Identity - the authenticated principal.

use serde::{Deserialize, Serialize};

/// The principal a session belongs to.
///
/// This is the exact shape persisted in the session slot, so field names are
/// part of the stored format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    /// Login key
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Text before the first '@', or the whole address when there is none.
    pub fn local_part(email: &str) -> &str {
        email.split('@').next().unwrap_or(email)
    }
}
