//! Client-side utilities.

pub mod poller;
