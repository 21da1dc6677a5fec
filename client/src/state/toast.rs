//! Toast notification store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages report outcomes through the [`Notifier`] trait; the `Toaster`
//! component renders whatever the store holds and schedules dismissal.
//! Keeping the trait separate lets submission logic run in tests against a
//! recording notifier instead of a live signal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a success toast stays on screen.
pub const SUCCESS_DURATION_MS: u32 = 2_000;
/// How long an error toast stays on screen.
pub const ERROR_DURATION_MS: u32 = 4_000;

/// Fire-and-forget user notifications.
pub trait Notifier {
    fn notify_success(&mut self, text: &str);
    fn notify_error(&mut self, text: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn duration_ms(self) -> u32 {
        match self {
            Self::Success => SUCCESS_DURATION_MS,
            Self::Error => ERROR_DURATION_MS,
        }
    }

    /// BEM modifier class for the toast element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

/// A single visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, text: text.into() });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

impl Notifier for ToastState {
    fn notify_success(&mut self, text: &str) {
        self.push(ToastKind::Success, text);
    }

    fn notify_error(&mut self, text: &str) {
        self.push(ToastKind::Error, text);
    }
}
