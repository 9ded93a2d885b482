//! Device endpoint paths and poll cadences.

use std::time::Duration;

// ── Endpoints ───────────────────────────────────────────────────

/// Read the full privacy-mask region set.
pub const PRIVACY_MASK_PATH: &str = "/api/privacy_mask";

/// Overwrite the full privacy-mask region set.
pub const SAVE_PRIVACY_MASK_PATH: &str = "/api/save_privacy_mask";

/// Read the capture-in-progress flag.
pub const CAPTURE_STATUS_PATH: &str = "/api/status/capture";

/// Read the hardware stats envelope: newest sample plus history.
pub const STATS_PATH: &str = "/api/stats";

/// Read the tail of the appliance log.
pub const LOG_PATH: &str = "/api/log";

/// Schedule an immediate capture.
pub const CAPTURE_TRIGGER_PATH: &str = "/api/take_photo";

/// Current preview image; callers append a cache-busting `ts` parameter.
pub const PREVIEW_PATH: &str = "/latest.jpg";

/// Authentication boundary the transport redirects to on session loss.
pub const LOGIN_PATH: &str = "/login";

// ── Poll cadences ───────────────────────────────────────────────

/// Capture flag poll interval while the control view is active.
pub const CAPTURE_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Stats poll interval while the status view is active.
pub const STATS_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Log poll interval while the log view is active.
pub const LOG_POLL_INTERVAL: Duration = Duration::from_secs(5);
