//! Login boundary page.
//!
//! Session issuance is the device's business; this page only posts the
//! credential form to it. Any 401 anywhere in the app lands here via the
//! transport's redirect.

use leptos::prelude::*;

/// Login page with a plain credential form posted to the device.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Camera appliance"</h1>
            <form class="login-page__form" method="post" action="/login">
                <label>"Username" <input type="text" name="username"/></label>
                <label>"Password" <input type="password" name="password"/></label>
                <button type="submit">"Sign in"</button>
            </form>
        </div>
    }
}
