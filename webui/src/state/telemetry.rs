//! Latest telemetry sample for the status view.

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod telemetry_test;

use crate::net::types::{Stats, Telemetry};

/// Last successfully polled telemetry sample.
///
/// `None` until the first poll returns a sample; a failed poll, or an
/// envelope without a sample yet, leaves the previous one in place
/// (last-known-good).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetryState {
    pub latest: Option<Telemetry>,
    /// Depth of the device's history buffer at the last poll.
    pub history_depth: usize,
}

impl TelemetryState {
    /// Record a freshly polled stats envelope.
    pub fn record(&mut self, stats: Stats) {
        if let Some(sample) = stats.latest {
            self.latest = Some(sample);
        }
        self.history_depth = stats.history.len();
    }
}
