use crate::{GuardDecision, Route, RouteGuard, SessionState, SessionStore};

use log::warn;
use tokio::sync::watch;

/// Tracks the active view and re-runs the guard on every navigation.
///
/// Nothing is cached between calls: each decision reads the latest session
/// state, so a logout takes effect on the next navigation or refresh.
pub struct Navigator {
    session: watch::Receiver<SessionState>,
    current: Option<Route>,
}

impl Navigator {
    pub fn new(store: &SessionStore) -> Self {
        Self::from_receiver(store.subscribe())
    }

    pub fn from_receiver(session: watch::Receiver<SessionState>) -> Self {
        Self {
            session,
            current: None,
        }
    }

    /// The view currently on screen.
    pub fn current(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    pub fn navigate(&mut self, location: &str) -> GuardDecision {
        self.navigate_to(Route::parse(location))
    }

    pub fn navigate_to(&mut self, route: Route) -> GuardDecision {
        let state = self.session.borrow_and_update().clone();
        let decision = RouteGuard::check(&state, route);

        if let Some(target) = decision.target() {
            self.current = Some(target.clone());
        }
        decision
    }

    /// Re-checks the view on screen against the latest session state.
    pub fn refresh(&mut self) -> Option<GuardDecision> {
        let route = self.current.clone()?;
        Some(self.navigate_to(route))
    }

    /// Waits for the loading window to close, then navigates.
    pub async fn navigate_when_ready(&mut self, location: &str) -> GuardDecision {
        if let Err(e) = self.session.wait_for(|state| !state.loading).await {
            warn!("Session store dropped while waiting for it to settle: {e}");
        }
        self.navigate(location)
    }
}
