//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models:
//! `session` holds the authenticated user and token (and is the persisted
//! record), `notices` holds transient user feedback. Each is provided to
//! the tree as an `RwSignal` context from the root component.

pub mod notices;
pub mod session;
