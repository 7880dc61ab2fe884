//! Single-active-window admission

/// Guards admission of display requests: at most one window may be in
/// flight at a time.
///
/// The gate is owned by a session rather than being process-wide, so
/// independent sessions never share state. It is read and mutated only
/// from the thread driving the session.
#[derive(Debug, Default)]
pub struct AdmissionGate {
    active: bool,
}

impl AdmissionGate {
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Try to claim the single active slot.
    ///
    /// Returns false while a window is still open. A rejected request is
    /// dropped entirely; there is no queue and no retry.
    pub fn try_accept(&mut self) -> bool {
        if self.active {
            log::debug!("message window already active, dropping request");
            return false;
        }
        self.active = true;
        true
    }

    /// Release the slot after the window has been dismissed.
    pub fn release(&mut self) {
        self.active = false;
    }

    /// Whether a window is currently in flight.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
