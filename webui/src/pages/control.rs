//! Control view: live preview, mask editor, and the capture status poller.

use leptos::prelude::*;

use crate::components::mask_editor::MaskEditor;
use crate::components::nav::NavBar;
use crate::consts::CAPTURE_POLL_INTERVAL;
use crate::net::api;
use crate::state::capture::CaptureState;
use crate::state::editor::EditorState;
use crate::util::poller::Poller;

/// Control page. Polls the capture flag while mounted; when a capture
/// finishes (flag drops from capturing to idle) the preview is reloaded
/// with a fresh cache-busting stamp and the region set is refetched once
/// the new image has been measured.
#[component]
pub fn ControlPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let capture = expect_context::<RwSignal<CaptureState>>();

    // The device is authoritative across reloads: re-arm the region fetch
    // on every mount, and drop the capture flag an earlier visit may have
    // left high so the first poll cannot fire a spurious finish edge.
    Effect::new(move || {
        editor.update(|ed| ed.mark_source_changed());
        capture.update(|c| c.reset_flag());
    });

    let poller = Poller::new();
    poller.start(CAPTURE_POLL_INTERVAL, move || async move {
        match api::fetch_capture_status().await {
            Ok(status) => {
                let finished = capture
                    .try_update(|c| c.observe(status.is_capturing))
                    .unwrap_or(false);
                if finished {
                    log::info!("capture finished, reloading preview");
                    editor.update(|ed| ed.mark_source_changed());
                }
            }
            Err(e) => api::report("polling capture status", &e),
        }
    });
    {
        let poller = poller.clone();
        on_cleanup(move || poller.stop());
    }

    let trigger_capture = move |_| {
        leptos::task::spawn_local(async move {
            match api::trigger_capture().await {
                // Optimistic: mark capturing so the finish edge reloads the
                // preview even if the first poll lands mid-capture.
                Ok(()) => capture.update(|c| {
                    c.observe(true);
                }),
                Err(e) => api::report("triggering capture", &e),
            }
        });
    };

    let capture_label = move || {
        if capture.get().is_capturing {
            "Capturing..."
        } else {
            "Idle"
        }
    };

    view! {
        <NavBar/>
        <section class="control-page">
            <h1>"Camera control"</h1>
            <p class="control-page__capture-state">{capture_label}</p>
            <button on:click=trigger_capture disabled=move || capture.get().is_capturing>
                "Capture now"
            </button>
            <MaskEditor/>
        </section>
    }
}
