//! Log view: tail of the appliance log.

use leptos::prelude::*;

use crate::components::nav::NavBar;
use crate::consts::LOG_POLL_INTERVAL;
use crate::net::api;
use crate::state::logview::LogState;
use crate::util::poller::Poller;

/// Log page. Polls the log tail while mounted.
#[component]
pub fn LogPage() -> impl IntoView {
    let logview = expect_context::<RwSignal<LogState>>();

    let poller = Poller::new();
    poller.start(LOG_POLL_INTERVAL, move || async move {
        match api::fetch_log().await {
            Ok(content) => logview.update(|l| l.record(content)),
            Err(e) => api::report("polling log", &e),
        }
    });
    {
        let poller = poller.clone();
        on_cleanup(move || poller.stop());
    }

    view! {
        <NavBar/>
        <section class="log-page">
            <h1>"Appliance log"</h1>
            <Show when=move || logview.get().content.is_empty()>
                <p>"Waiting for log content..."</p>
            </Show>
            <pre class="log-page__content">{move || logview.get().content}</pre>
        </section>
    }
}
