//! Browser glue and small display helpers.

pub mod download;
pub mod format;
pub mod storage;
