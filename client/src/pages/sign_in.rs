//! Sign-in page: email access code, then on to the onboarding entry point.

use gates::SessionPayload;
use gates::policy::{PROFILE_ENTRY_PATH, SIGN_UP_PATH};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::email_code_form::EmailCodeForm;
use crate::state::session::SessionState;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_signed_in = move |payload: SessionPayload| {
        session.update(|s| {
            s.accept(payload);
        });
        navigate(PROFILE_ENTRY_PATH, NavigateOptions::default());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <EmailCodeForm on_signed_in=on_signed_in/>
                <p class="auth-card__footer">
                    "New here? "
                    <a href=SIGN_UP_PATH>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
