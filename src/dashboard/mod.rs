//! Admin dashboard shell state machine.

mod blog_manage;
mod confirm;
mod panel;
mod shell;

pub use blog_manage::{BlogDraft, BlogManager};
pub use confirm::{ConfirmDialog, Confirmation, DELETE_BLOG_DIALOG, LOGOUT_DIALOG};
pub use panel::Panel;
pub use shell::DashboardShell;
