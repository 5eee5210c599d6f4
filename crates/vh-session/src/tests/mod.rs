mod guard;
mod property_tests;
mod route;

use crate::{MemorySessionSlot, MockAuthenticator, SessionSlot, SessionStore, SlotError, SlotResult};

use std::path::PathBuf;
use std::sync::Arc;

pub(crate) const TEST_KEY: &str = "videoSaasUser";

/// Slot whose writes always fail; reads report an empty slot.
pub(crate) struct FailingSlot;

impl SessionSlot for FailingSlot {
    fn key(&self) -> &str {
        TEST_KEY
    }

    fn read(&self) -> SlotResult<Option<String>> {
        Ok(None)
    }

    fn write(&self, _value: &str) -> SlotResult<()> {
        Err(SlotError::file_write(
            PathBuf::from("/readonly/videoSaasUser.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    fn clear(&self) -> SlotResult<()> {
        Err(SlotError::remove(
            PathBuf::from("/readonly/videoSaasUser.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }
}

/// Slot whose reads always fail.
pub(crate) struct UnreadableSlot;

impl SessionSlot for UnreadableSlot {
    fn key(&self) -> &str {
        TEST_KEY
    }

    fn read(&self) -> SlotResult<Option<String>> {
        Err(SlotError::file_read(
            PathBuf::from("/locked/videoSaasUser.json"),
            std::io::Error::other("locked"),
        ))
    }

    fn write(&self, _value: &str) -> SlotResult<()> {
        Ok(())
    }

    fn clear(&self) -> SlotResult<()> {
        Ok(())
    }
}

/// Store over a shared in-memory slot, already restored.
pub(crate) fn restored_store(slot: Arc<MemorySessionSlot>) -> SessionStore {
    let store = SessionStore::new(slot, Arc::new(MockAuthenticator::default()));
    store.restore();
    store
}

pub(crate) fn memory_slot() -> Arc<MemorySessionSlot> {
    Arc::new(MemorySessionSlot::new(TEST_KEY))
}

/// Readable, writable slot that refuses to be cleared.
pub(crate) struct StickySlot(pub(crate) MemorySessionSlot);

impl SessionSlot for StickySlot {
    fn key(&self) -> &str {
        self.0.key()
    }

    fn read(&self) -> SlotResult<Option<String>> {
        self.0.read()
    }

    fn write(&self, value: &str) -> SlotResult<()> {
        self.0.write(value)
    }

    fn clear(&self) -> SlotResult<()> {
        Err(SlotError::remove(
            PathBuf::from("/sticky/videoSaasUser.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "sticky"),
        ))
    }
}
