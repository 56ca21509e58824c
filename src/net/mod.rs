//! Network layer: backend models, endpoint table, gateway, and typed
//! wrappers. Pages call `api::*` functions; everything below that flows
//! through `http::Gateway`.

pub mod api;
pub mod endpoints;
pub mod http;
pub mod types;
