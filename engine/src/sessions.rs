//! Per-user session registry.
//!
//! Each user owns one slot holding their conversational state behind its own
//! mutex. The same mutex serializes the ledger read-modify-write performed
//! while the slot is held, so a double-submitted bet cannot interleave
//! between the balance read and the write.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tugrik_types::{SessionState, UserId};

/// Registry of per-user session slots.
///
/// Slots are created on first touch and kept for the life of the process;
/// the map lock is only held long enough to clone the slot handle, so
/// operations for different users proceed without mutual blocking.
#[derive(Debug, Default)]
pub struct Sessions {
    slots: Mutex<HashMap<UserId, Arc<Mutex<SessionState>>>>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the user's slot, creating an `Idle` one if needed.
    pub fn slot(&self, user: UserId) -> Arc<Mutex<SessionState>> {
        let mut slots = self.slots.lock().unwrap();
        slots.entry(user).or_default().clone()
    }

    /// Snapshot of the user's current state. Test and inspection helper.
    pub fn state(&self, user: UserId) -> SessionState {
        *self.slot(user).lock().unwrap()
    }
}
