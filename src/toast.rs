//! Single-slot toast notifications.
//!
//! At most one toast is visible at a time. Showing a new toast replaces the
//! current one whether or not it was dismissed; there is no queue behind it.

use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    /// Milliseconds since the Unix epoch at creation, bumped if needed to
    /// stay unique within a slot
    pub id: i64,
    pub message: String,
    pub kind: ToastKind,
}

/// Observable state of a [`ToastSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Empty,
    Showing,
}

/// Holder for the one toast currently on screen.
#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
    last_id: i64,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, discarding whatever toast was showing. Returns the
    /// new toast's id.
    pub fn show(&mut self, message: impl Into<String>, kind: Option<ToastKind>) -> i64 {
        let id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        self.current = Some(Toast {
            id,
            message: message.into(),
            kind: kind.unwrap_or_default(),
        });
        id
    }

    /// Dismiss the toast with `id`. Ids of already-replaced toasts are
    /// ignored.
    pub fn remove(&mut self, id: i64) {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
        }
    }

    /// Rewrite the message text of the showing toast in place, keeping its
    /// id and kind.
    pub fn update_messages<F>(&mut self, transform: F)
    where
        F: FnOnce(&str) -> String,
    {
        if let Some(toast) = self.current.as_mut() {
            toast.message = transform(&toast.message);
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn state(&self) -> ToastState {
        if self.current.is_some() {
            ToastState::Showing
        } else {
            ToastState::Empty
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
