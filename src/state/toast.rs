#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Auto-dismiss window for a toast, in milliseconds.
pub const TOAST_DISMISS_MS: u32 = 5_000;

/// Kind of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// App-level toast state.
///
/// Showing a toast bumps `seq`; the dismiss timer that was armed for
/// an older toast compares its captured sequence before clearing, so
/// replacing a toast implicitly cancels the previous timer.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
    seq: u64,
}

impl ToastState {
    /// Replace the current toast and return the sequence number the
    /// dismiss timer must present to `clear_if`.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Toast {
            kind,
            message: message.into(),
        });
        self.seq
    }

    /// Clear the toast if `seq` still identifies the one showing.
    /// Stale timers fall through without touching a newer toast.
    pub fn clear_if(&mut self, seq: u64) -> bool {
        if self.seq == seq && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }
}
