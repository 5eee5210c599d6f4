use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_DIR, DEFAULT_STORAGE_KEY};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the durable slot holding the serialized identity
    pub storage_key: String,
    /// Directory (relative to the config dir) where the slot file lives
    pub dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            dir: String::from(DEFAULT_SESSION_DIR),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::session("session.storage_key cannot be empty"));
        }

        if !self
            .storage_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::session(format!(
                "session.storage_key may only contain [A-Za-z0-9_-], got '{}'",
                self.storage_key
            )));
        }

        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::session(
                "session.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
