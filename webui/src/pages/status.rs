//! Status view: hardware telemetry readouts.

use leptos::prelude::*;

use crate::components::nav::NavBar;
use crate::consts::STATS_POLL_INTERVAL;
use crate::net::api;
use crate::state::telemetry::TelemetryState;
use crate::util::poller::Poller;

/// Status page. Polls the stats envelope while mounted; a remount
/// fetches immediately rather than waiting for the next interval.
#[component]
pub fn StatusPage() -> impl IntoView {
    let telemetry = expect_context::<RwSignal<TelemetryState>>();

    let poller = Poller::new();
    poller.start(STATS_POLL_INTERVAL, move || async move {
        match api::fetch_stats().await {
            Ok(stats) => telemetry.update(|t| t.record(stats)),
            Err(e) => api::report("polling stats", &e),
        }
    });
    {
        let poller = poller.clone();
        on_cleanup(move || poller.stop());
    }

    let latest = move || telemetry.get().latest;

    view! {
        <NavBar/>
        <section class="status-page">
            <h1>"Device status"</h1>
            {move || {
                latest()
                    .map(|t| {
                        view! {
                            <dl class="status-page__stats">
                                <dt>"CPU temperature"</dt>
                                <dd>{format!("{:.1} C", t.cpu_temperature)}</dd>
                                <dt>"CPU usage"</dt>
                                <dd>{format!("{:.1}%", t.cpu_usage)}</dd>
                                <dt>"Memory usage"</dt>
                                <dd>{format!("{:.1}%", t.memory_usage)}</dd>
                                <dt>"Disk usage"</dt>
                                <dd>{format!("{:.1}%", t.disk_usage)}</dd>
                                <dt>"Load average"</dt>
                                <dd>
                                    {format!(
                                        "{:.2} / {:.2} / {:.2}",
                                        t.load_average[0],
                                        t.load_average[1],
                                        t.load_average[2],
                                    )}
                                </dd>
                            </dl>
                        }
                    })
            }}
            <Show when=move || latest().is_none()>
                <p>"Waiting for the first sample..."</p>
            </Show>
            <p class="status-page__history">
                {move || format!("{} samples in history", telemetry.get().history_depth)}
            </p>
        </section>
    }
}
