pub mod file_slot;
pub mod memory_slot;

use crate::SlotResult;

/// A single named durable entry holding the serialized current identity.
///
/// Only [`SessionStore`](crate::SessionStore) reads or writes a slot.
pub trait SessionSlot: Send + Sync {
    /// Name of the slot.
    fn key(&self) -> &str;

    /// Returns the stored value, or `None` when the slot is empty.
    fn read(&self) -> SlotResult<Option<String>>;

    /// Replaces the stored value.
    fn write(&self, value: &str) -> SlotResult<()>;

    /// Empties the slot. Clearing an empty slot succeeds.
    fn clear(&self) -> SlotResult<()>;

    /// Moves unreadable contents out of the way so the next write starts clean.
    fn quarantine(&self) -> SlotResult<()> {
        self.clear()
    }
}
