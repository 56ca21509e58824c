//! Shared UI components: the dashboard shell and its pieces, plus the
//! dialogs and notices used across pages.

pub mod confirm_dialog;
pub mod guard;
pub mod header;
pub mod notices;
pub mod shell;
pub mod sidebar;
