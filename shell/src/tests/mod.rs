
use crate::App;

use std::sync::Arc;

use vh_core::MockCatalog;
use vh_session::{MemorySessionSlot, MockAuthenticator, SessionStore};

/// App over an in-memory slot, already restored.
pub(crate) fn memory_app() -> App {
    let slot = Arc::new(MemorySessionSlot::new("videoSaasUser"));
    let store = SessionStore::new(slot, Arc::new(MockAuthenticator::default()));
    store.restore();
    App::new(store, MockCatalog::new())
}
