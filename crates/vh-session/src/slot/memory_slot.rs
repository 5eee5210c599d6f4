use crate::{SessionSlot, SlotResult};

use std::sync::{Mutex, MutexGuard};

/// Process-local slot. Contents vanish with the process.
#[derive(Debug)]
pub struct MemorySessionSlot {
    key: String,
    value: Mutex<Option<String>>,
}

impl MemorySessionSlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Mutex::new(None),
        }
    }

    /// Slot pre-filled with `value`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Mutex::new(Some(value.into())),
        }
    }

    fn value(&self) -> MutexGuard<'_, Option<String>> {
        self.value.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionSlot for MemorySessionSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> SlotResult<Option<String>> {
        Ok(self.value().clone())
    }

    fn write(&self, value: &str) -> SlotResult<()> {
        *self.value() = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> SlotResult<()> {
        *self.value() = None;
        Ok(())
    }
}
