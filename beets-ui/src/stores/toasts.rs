//! Toast notifications

use beets_core::{Notice, NoticeLevel};
use dioxus::prelude::*;

/// How long a toast stays up before dismissing itself
pub const TOAST_TIMEOUT_MS: u64 = 5_000;

/// Toasts shown at once; older ones are dropped first
const MAX_TOASTS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Stack of visible toasts, newest last
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a notice, returning the toast id for later dismissal.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            level: notice.level,
            message: notice.message,
        });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
        id
    }

    /// Dismissing an id that is already gone is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
