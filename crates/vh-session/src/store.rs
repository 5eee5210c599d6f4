use crate::{Authenticator, SessionError, SessionSlot, SessionState, Result as SessionResult};

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::watch;
use vh_core::Identity;

const LOGGED_OUT_MARKER: &str = "";

/// Single source of truth for who is logged in.
///
/// Every mutation writes the slot before publishing the new state, so the
/// in-memory identity never runs ahead of what is persisted.
pub struct SessionStore {
    slot: Arc<dyn SessionSlot>,
    authenticator: Arc<dyn Authenticator>,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Creates a store in the loading state. Call [`restore`](Self::restore) next.
    pub fn new(slot: Arc<dyn SessionSlot>, authenticator: Arc<dyn Authenticator>) -> Self {
        let (state, _) = watch::channel(SessionState::initial());
        Self {
            slot,
            authenticator,
            state,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.state.borrow().identity.clone()
    }

    /// Receiver that observes every published state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Rehydrates the identity from the slot. Never fails: unreadable or
    /// malformed contents leave the session logged out.
    pub fn restore(&self) {
        let key = self.slot.key().to_string();

        let identity = match self.slot.read() {
            Ok(Some(contents)) if contents.trim().is_empty() => {
                info!("Session slot '{key}' is blank, starting logged out");
                None
            }
            Ok(Some(contents)) => match serde_json::from_str::<Identity>(&contents) {
                Ok(identity) => {
                    info!("Restored session for {} from slot '{key}'", identity.id);
                    Some(identity)
                }
                Err(e) => {
                    warn!("Session slot '{key}' is corrupted, starting logged out: {e}");
                    if let Err(e) = self.slot.quarantine() {
                        warn!("Failed to quarantine session slot '{key}': {e}");
                    }
                    None
                }
            },
            Ok(None) => {
                info!("No stored session in slot '{key}'");
                None
            }
            Err(e) => {
                warn!("Failed to read session slot '{key}', starting logged out: {e}");
                None
            }
        };

        self.state.send_modify(|state| {
            state.identity = identity;
            state.loading = false;
        });
    }

    /// Logs in. Empty email or password fails with `InvalidCredentials` and
    /// leaves the current identity untouched.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<Identity> {
        self.begin_attempt();

        let result = self.try_login(email, password).await;
        self.finish_attempt(&result);
        result
    }

    /// Registers and logs in. Any empty field fails with `MissingFields`.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> SessionResult<Identity> {
        self.begin_attempt();

        let result = self.try_register(name, email, password).await;
        self.finish_attempt(&result);
        result
    }

    /// Clears the identity and the slot. Always succeeds; a slot that cannot
    /// be removed is blanked instead.
    pub fn logout(&self) {
        if let Err(clear_err) = self.slot.clear() {
            // Blank the slot instead so restore() starts logged out.
            if let Err(write_err) = self.slot.write(LOGGED_OUT_MARKER) {
                warn!(
                    "Failed to clear session slot '{}': {clear_err}; blanking it also failed: {write_err}",
                    self.slot.key()
                );
            }
        }

        self.state.send_modify(|state| state.identity = None);
        info!("Logged out");
    }

    async fn try_login(&self, email: &str, password: &str) -> SessionResult<Identity> {
        Self::validate_login(email, password)?;
        let identity = self.authenticator.authenticate(email, password).await?;
        self.persist(identity)
    }

    async fn try_register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> SessionResult<Identity> {
        Self::validate_registration(name, email, password)?;
        let identity = self.authenticator.enroll(name, email, password).await?;
        self.persist(identity)
    }

    #[track_caller]
    fn validate_login(email: &str, password: &str) -> SessionResult<()> {
        if email.is_empty() || password.is_empty() {
            return Err(SessionError::invalid_credentials());
        }
        Ok(())
    }

    #[track_caller]
    fn validate_registration(name: &str, email: &str, password: &str) -> SessionResult<()> {
        let missing: Vec<&'static str> = [("name", name), ("email", email), ("password", password)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();

        if !missing.is_empty() {
            return Err(SessionError::missing_fields(missing));
        }
        Ok(())
    }

    fn persist(&self, identity: Identity) -> SessionResult<Identity> {
        let json = serde_json::to_string(&identity)?;
        self.slot.write(&json)?;
        info!("Saved session for {} to slot '{}'", identity.id, self.slot.key());
        Ok(identity)
    }

    fn begin_attempt(&self) {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    fn finish_attempt(&self, result: &SessionResult<Identity>) {
        self.state.send_modify(|state| {
            state.loading = false;
            match result {
                Ok(identity) => state.identity = Some(identity.clone()),
                Err(e) => {
                    warn!("Session attempt failed: {e}");
                    state.error = Some(e.user_message().to_string());
                }
            }
        });
    }
}
