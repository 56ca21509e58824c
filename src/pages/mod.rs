//! Routed pages. Everything except login renders inside the [`Shell`]
//! (sidebar, header, notices), which also applies the session guard.
//!
//! [`Shell`]: crate::components::shell::Shell

pub mod catalogs;
pub mod files;
pub mod incident_detail;
pub mod incidents;
pub mod login;
pub mod overview;
pub mod users;
