//! Top navigation between the control, status, and log views.

use leptos::prelude::*;
use leptos_router::components::A;

/// Navigation bar. Route changes drive poller lifetimes: leaving a view
/// unmounts its page, which stops that view's poller in `on_cleanup`.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav">
            <A href="/">"Control"</A>
            <A href="/status">"Status"</A>
            <A href="/log">"Log"</A>
        </nav>
    }
}
