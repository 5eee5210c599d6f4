use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AVATAR_BASE_URL, DEFAULT_LOGIN_USER_ID,
    DEFAULT_SIMULATED_LATENCY_MS, MAX_SIMULATED_LATENCY_MS,
};

use serde::Deserialize;

/// Settings for the placeholder authenticator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Avatars are `<avatar_base_url>?u=<email>`
    pub avatar_base_url: String,
    /// Artificial delay before a login/register completes
    pub simulated_latency_ms: u64,
    /// Id assigned to every identity created by login
    pub login_user_id: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            avatar_base_url: String::from(DEFAULT_AVATAR_BASE_URL),
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            login_user_id: String::from(DEFAULT_LOGIN_USER_ID),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.avatar_base_url.starts_with("http://")
            || self.avatar_base_url.starts_with("https://"))
        {
            return Err(ConfigError::auth(format!(
                "auth.avatar_base_url must be an http(s) URL, got '{}'",
                self.avatar_base_url
            )));
        }

        if self.simulated_latency_ms > MAX_SIMULATED_LATENCY_MS {
            return Err(ConfigError::auth(format!(
                "auth.simulated_latency_ms must be 0-{}, got {}",
                MAX_SIMULATED_LATENCY_MS, self.simulated_latency_ms
            )));
        }

        if self.login_user_id.is_empty() {
            return Err(ConfigError::auth("auth.login_user_id cannot be empty"));
        }

        Ok(())
    }
}
