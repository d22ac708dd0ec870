//! Queued user-visible notifications.
//!
//! DESIGN
//! ======
//! A fire-and-forget queue: producers push, the app shell renders and
//! dismisses. Pushing never fails, so a notification can never affect a
//! decision that was already made when it was queued.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier for keyed rendering and dismissal.
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Notification queue state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue an error notification.
    pub fn push_error(&mut self, message: impl Into<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            message: message.into(),
            severity: Severity::Error,
        });
    }

    /// Dismiss a notification by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}
