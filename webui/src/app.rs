//! Root application component with routing and shared state contexts.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{control::ControlPage, log::LogPage, login::LoginPage, status::StatusPage};
use crate::state::capture::CaptureState;
use crate::state::editor::EditorState;
use crate::state::logview::LogState;
use crate::state::telemetry::TelemetryState;

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
/// State lives above the routes so a view keeps its last-known-good data
/// across a round trip to another view; the pollers themselves are owned
/// by the pages and stop on unmount.
#[component]
pub fn App() -> impl IntoView {
    let editor = RwSignal::new(EditorState::default());
    let capture = RwSignal::new(CaptureState::default());
    let telemetry = RwSignal::new(TelemetryState::default());
    let logview = RwSignal::new(LogState::default());

    provide_context(editor);
    provide_context(capture);
    provide_context(telemetry);
    provide_context(logview);

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=ControlPage/>
                <Route path=StaticSegment("status") view=StatusPage/>
                <Route path=StaticSegment("log") view=LogPage/>
            </Routes>
        </Router>
    }
}
