//! Session lifecycle and route protection.
//!
//! [`SessionStore`] owns the current [`Identity`](vh_core::Identity) and keeps
//! it in sync with a durable [`SessionSlot`]. [`RouteGuard`] decides whether a
//! requested [`Route`] may render for a given [`SessionState`], and
//! [`Navigator`] re-runs that decision on every navigation.

pub mod authenticator;
pub mod error;
pub mod guard;
pub mod navigator;
pub mod route;
pub mod session_state;
pub mod slot;
pub mod store;

pub use authenticator::{Authenticator, MockAuthenticator};
pub use error::{Result, SessionError, SlotError, SlotResult};
pub use guard::{GuardDecision, RouteGuard};
pub use navigator::Navigator;
pub use route::Route;
pub use session_state::{AuthStatus, SessionState};
pub use slot::{SessionSlot, file_slot::FileSessionSlot, memory_slot::MemorySessionSlot};
pub use store::SessionStore;

#[cfg(test)]
mod tests;
