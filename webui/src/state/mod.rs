//! Shared client-side state modules.
//!
//! State is split by domain so each view depends on a small focused model.
//! Every struct here is plain data provided as an `RwSignal` context from
//! the root component; all of its logic is pure and natively tested.

pub mod capture;
pub mod editor;
pub mod logview;
pub mod telemetry;
