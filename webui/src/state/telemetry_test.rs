use super::*;

fn sample(cpu_usage: f64) -> Telemetry {
    Telemetry {
        cpu_temperature: 45.0,
        cpu_usage,
        memory_usage: 30.0,
        disk_usage: 55.0,
        load_average: [0.1, 0.2, 0.3],
        timestamp: 1.0,
    }
}

fn envelope(latest: Option<Telemetry>, history: Vec<Telemetry>) -> Stats {
    Stats { latest, history }
}

#[test]
fn default_has_no_sample() {
    assert_eq!(TelemetryState::default().latest, None);
}

#[test]
fn record_replaces_latest() {
    let mut state = TelemetryState::default();
    state.record(envelope(Some(sample(10.0)), vec![]));
    state.record(envelope(Some(sample(20.0)), vec![sample(10.0)]));
    assert!((state.latest.unwrap().cpu_usage - 20.0).abs() < 1e-9);
    assert_eq!(state.history_depth, 1);
}

#[test]
fn envelope_without_a_sample_keeps_last_known_good() {
    let mut state = TelemetryState::default();
    state.record(envelope(Some(sample(10.0)), vec![]));
    state.record(envelope(None, vec![]));
    assert!((state.latest.unwrap().cpu_usage - 10.0).abs() < 1e-9);
}
