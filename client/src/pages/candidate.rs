//! Candidate workspace. Placeholder until job search lands.

use gates::policy::PROFILE_ENTRY_PATH;
use leptos::prelude::*;

use super::dashboard::SignOutButton;

#[component]
pub fn CandidateDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Candidate dashboard"</h1>
                <SignOutButton/>
            </header>
            <p>"Jobs matching your trade will appear here."</p>
            <a class="btn" href=PROFILE_ENTRY_PATH>"My profile"</a>
        </div>
    }
}
