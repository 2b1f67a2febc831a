/// Two-state confirm pattern: nothing pending, or waiting on the user to
/// confirm an action against `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation<T> {
    Idle,
    Pending(T),
}

impl<T> Default for Confirmation<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Confirmation<T> {
    /// Replaces whatever was pending.
    pub fn request(&mut self, target: T) {
        *self = Self::Pending(target);
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Returns the pending target and goes back to idle.
    pub fn take(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Pending(target) => Some(target),
            Self::Idle => None,
        }
    }

    pub fn pending(&self) -> Option<&T> {
        match self {
            Self::Pending(target) => Some(target),
            Self::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// Text of a confirmation dialog. The confirm/cancel actions belong to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: &'static str,
    pub message: &'static str,
}

pub const LOGOUT_DIALOG: ConfirmDialog = ConfirmDialog {
    title: "Confirm Logout",
    message: "Are you sure you want to logout?",
};

pub const DELETE_BLOG_DIALOG: ConfirmDialog = ConfirmDialog {
    title: "Delete Blog",
    message: "Are you sure you want to delete this blog?",
};
