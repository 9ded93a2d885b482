//! Top-level view pages, one per route.
//!
//! Each page owns the poller(s) for its view: started in the component
//! body (immediate first fetch) and stopped in `on_cleanup`, so a poller
//! runs exactly while its view is active.

pub mod control;
pub mod log;
pub mod login;
pub mod status;
