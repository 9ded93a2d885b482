//! Network layer: wire types and the session-aware HTTP transport.

pub mod api;
pub mod types;
