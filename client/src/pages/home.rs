//! Public landing page.

use gates::policy::{PROFILE_ENTRY_PATH, SIGN_IN_PATH, SIGN_UP_PATH};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Guildustry"</h1>
            <p>"Skilled trades, matched with the people hiring them."</p>
            <nav class="home-page__actions">
                <a class="btn btn--primary" href=SIGN_UP_PATH>"Get started"</a>
                <a class="btn" href=SIGN_IN_PATH>"Sign in"</a>
                <a class="btn" href=PROFILE_ENTRY_PATH>"My profile"</a>
                <a class="btn" href="/about">"About"</a>
            </nav>
        </div>
    }
}
