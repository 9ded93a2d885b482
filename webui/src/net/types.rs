//! Wire types for the device status endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Capture flag polled from `/api/status/capture`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureStatus {
    pub is_capturing: bool,
}

/// Stats envelope served by `/api/stats`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stats {
    /// Newest sample, or `None` before the collector's first pass after
    /// boot (the device sends an empty object then).
    #[serde(deserialize_with = "latest_sample")]
    pub latest: Option<Telemetry>,
    /// Aggregated history, oldest first.
    #[serde(default)]
    pub history: Vec<Telemetry>,
}

fn latest_sample<'de, D>(de: D) -> Result<Option<Telemetry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Sample(Telemetry),
        Empty {},
    }
    Ok(match Raw::deserialize(de)? {
        Raw::Sample(t) => Some(t),
        Raw::Empty {} => None,
    })
}

/// One hardware telemetry sample inside the stats envelope.
///
/// Field names follow the appliance's camelCase stats records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Telemetry {
    /// CPU temperature in degrees Celsius.
    pub cpu_temperature: f64,
    /// CPU usage percentage.
    pub cpu_usage: f64,
    /// Memory usage percentage.
    pub memory_usage: f64,
    /// Root filesystem usage percentage.
    pub disk_usage: f64,
    /// 1, 5, and 15 minute load averages.
    pub load_average: [f64; 3],
    /// Unix timestamp of the sample.
    pub timestamp: f64,
}
