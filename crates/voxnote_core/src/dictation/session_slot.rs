//! Process-wide active-session accounting.
//!
//! # Responsibility
//! - Guarantee at most one live dictation session per slot.
//! - Displace the previous session when a new one activates, so superseded
//!   streams stop feeding drafts instead of leaking.
//!
//! # Invariants
//! - `release` only clears the slot for the session that owns it.
//! - Composers share the process-global slot unless one is injected.

use crate::dictation::session::SessionId;
use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

static GLOBAL_SLOT: Lazy<Arc<Mutex<SessionSlot>>> =
    Lazy::new(|| Arc::new(Mutex::new(SessionSlot::new())));

/// Returns the process-global session slot.
pub fn global_session_slot() -> Arc<Mutex<SessionSlot>> {
    Arc::clone(&GLOBAL_SLOT)
}

/// Single-occupancy slot for the live dictation session.
#[derive(Debug, Default)]
pub struct SessionSlot {
    active: Option<SessionId>,
}

impl SessionSlot {
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Returns the currently active session id.
    pub fn active_session(&self) -> Option<SessionId> {
        self.active
    }

    /// Returns whether `id` is the active session.
    pub fn owns(&self, id: SessionId) -> bool {
        self.active == Some(id)
    }

    /// Activates `id`, returning the displaced session id when one was
    /// live.
    pub fn activate(&mut self, id: SessionId) -> Option<SessionId> {
        let displaced = self.active.replace(id);
        if let Some(old) = displaced {
            warn!(
                "event=session_displaced module=dictation status=warn old_session={old} new_session={id}"
            );
        }
        displaced
    }

    /// Releases the slot when `id` still owns it.
    ///
    /// Returns false when the slot has already moved on to another
    /// session.
    pub fn release(&mut self, id: SessionId) -> bool {
        if self.active == Some(id) {
            self.active = None;
            return true;
        }
        false
    }
}
