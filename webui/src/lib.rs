//! # webui
//!
//! Leptos + WASM control surface for the networked camera appliance.
//!
//! This crate contains the pages, components, client state, and network
//! layer of the browser UI. The interesting editor logic lives in the
//! `mask` crate; this crate wires it into DOM events, timers, and the
//! device's HTTP endpoints, and keeps the UI in sync with remotely-mutated
//! device state through view-scoped pollers.

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
