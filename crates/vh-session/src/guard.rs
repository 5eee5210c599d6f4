use crate::{Route, SessionState};

use log::debug;
use serde::Serialize;

/// Outcome of checking a route against the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Show the requested view unmodified
    Render { route: Route },
    /// Show `to` instead of the protected `from`
    Redirect { to: Route, from: Route },
    /// Session is still loading; decide again once it settles
    Pending { requested: Route },
}

impl GuardDecision {
    /// The view that ends up on screen, if any.
    pub fn target(&self) -> Option<&Route> {
        match self {
            Self::Render { route } => Some(route),
            Self::Redirect { to, .. } => Some(to),
            Self::Pending { .. } => None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }
}

/// Gates protected views on the presence of a current identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    pub fn check(state: &SessionState, route: Route) -> GuardDecision {
        let decision = if !route.is_protected() || state.is_authenticated() {
            GuardDecision::Render { route }
        } else if state.loading {
            // An identity may still arrive from restore(); redirecting now
            // would bounce a returning user to the login screen.
            GuardDecision::Pending { requested: route }
        } else {
            GuardDecision::Redirect {
                to: Route::Login,
                from: route,
            }
        };

        debug!("Route guard: {decision:?}");
        decision
    }
}
