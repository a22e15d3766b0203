//! Profile pages: the onboarding entry point, creation and view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/profile` is not guarded. It holds an `OnboardingMount` and renders one
//! of four screens from the session snapshot: loading, sign-in, the creation
//! wizard, or the stored profile. A successful wizard submit refreshes the
//! session, which flips `has_profile` and moves the mount to the view screen
//! without a navigation.
//!
//! `/profile/create` and `/profile/view` are guarded stand-alone pages.

use gates::policy::PROFILE_ENTRY_PATH;
use gates::{OnboardingMount, OnboardingRoute, SessionPayload};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::email_code_form::EmailCodeForm;
use crate::components::profile_summary::ProfileSummary;
use crate::components::profile_wizard::ProfileWizard;
use crate::state::session::SessionState;

#[component]
pub fn ProfileEntryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let mount = StoredValue::new(OnboardingMount::new());
    let screen = RwSignal::new(OnboardingRoute::Pending);

    Effect::new(move || {
        let (version, snapshot) = session.with(|s| (s.version(), s.snapshot()));
        if let Some(next) = mount.try_update_value(|m| m.observe(version, &snapshot)).flatten() {
            screen.set(next);
        }
    });

    let on_signed_in = move |payload: SessionPayload| {
        session.update(|s| {
            s.accept(payload);
        });
    };

    view! {
        <div class="profile-page">
            {move || match screen.get() {
                OnboardingRoute::Pending => view! { <p class="profile-page__loading">"Loading..."</p> }.into_any(),
                OnboardingRoute::SignIn => {
                    view! {
                        <h1>"Sign in to set up your profile"</h1>
                        <EmailCodeForm on_signed_in=on_signed_in/>
                    }
                        .into_any()
                }
                OnboardingRoute::CreateProfile => {
                    view! {
                        <h1>"Create your profile"</h1>
                        <ProfileWizard on_complete=|()| ()/>
                    }
                        .into_any()
                }
                OnboardingRoute::ViewProfile => {
                    view! {
                        <h1>"Your profile"</h1>
                        <ProfileSummary/>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn CreateProfilePage() -> impl IntoView {
    let navigate = use_navigate();
    let on_complete = move |()| navigate(PROFILE_ENTRY_PATH, NavigateOptions::default());

    view! {
        <div class="profile-page">
            <h1>"Create your profile"</h1>
            <ProfileWizard on_complete=on_complete/>
        </div>
    }
}

#[component]
pub fn ViewProfilePage() -> impl IntoView {
    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>
            <ProfileSummary/>
            <a class="btn" href="/dashboard">"Dashboard"</a>
        </div>
    }
}
