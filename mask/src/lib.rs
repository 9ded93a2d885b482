//! Privacy-mask editing core for the camera appliance web UI.
//!
//! This crate holds every piece of editor logic that does not need a
//! browser: coordinate conversion between the rendered preview and the
//! resolution-independent percentage space, the region store that owns
//! committed mask polygons and the draft under construction, and the
//! click/double-click disambiguation state machine. The `webui` crate wires
//! these into DOM events, timers, and HTTP; everything here runs and is
//! tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, preview geometry, pixel/percentage conversion |
//! | [`region`] | Mask polygons and the in-memory [`region::MaskStore`] |
//! | [`click`] | Click vs double-click disambiguation machine |
//! | [`consts`] | Shared numeric constants (debounce delay, vertex minimum) |

pub mod click;
pub mod consts;
pub mod geometry;
pub mod region;
