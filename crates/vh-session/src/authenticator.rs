//! Credential verification seam.
//!
//! [`SessionStore`](crate::SessionStore) validates form input and then asks an
//! [`Authenticator`] for the identity. [`MockAuthenticator`] accepts every
//! request; a backend-backed implementation slots in behind the same trait.

use crate::Result as SessionResult;

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;
use vh_config::AuthConfig;
use vh_core::Identity;

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolves the identity for an existing account.
    async fn authenticate(&self, email: &str, password: &str) -> SessionResult<Identity>;

    /// Creates an account and returns its identity.
    async fn enroll(&self, name: &str, email: &str, password: &str) -> SessionResult<Identity>;
}

/// Synthesizes identities without checking credentials.
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    avatar_base_url: String,
    login_user_id: String,
    latency: Duration,
}

impl MockAuthenticator {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            avatar_base_url: config.avatar_base_url.clone(),
            login_user_id: config.login_user_id.clone(),
            latency: Duration::from_millis(config.simulated_latency_ms),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Deterministic avatar URL for an email address.
    pub fn avatar_for(&self, email: &str) -> String {
        format!("{}?u={}", self.avatar_base_url, email)
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, email: &str, _password: &str) -> SessionResult<Identity> {
        self.simulate_round_trip().await;

        Ok(
            Identity::new(&self.login_user_id, email, Identity::local_part(email))
                .with_avatar(self.avatar_for(email)),
        )
    }

    async fn enroll(&self, name: &str, email: &str, _password: &str) -> SessionResult<Identity> {
        self.simulate_round_trip().await;

        Ok(Identity::new(Uuid::new_v4().to_string(), email, name)
            .with_avatar(self.avatar_for(email)))
    }
}
