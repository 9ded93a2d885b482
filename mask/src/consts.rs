//! Shared numeric constants for the mask crate.

// ── Input ───────────────────────────────────────────────────────

/// Delay before a held click is confirmed as a single click, in milliseconds.
///
/// A double click always lands inside this window, so waiting it out is what
/// keeps a double click from also registering a stray vertex.
pub const CLICK_CONFIRM_DELAY_MS: u32 = 250;

// ── Regions ─────────────────────────────────────────────────────

/// Minimum vertex count for a committed mask region.
pub const MIN_REGION_VERTICES: usize = 3;

// ── Coordinates ─────────────────────────────────────────────────

/// Full scale of the percentage coordinate space on each axis.
pub const PERCENT_SCALE: f64 = 100.0;
