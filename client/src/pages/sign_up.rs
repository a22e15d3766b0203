//! Sign-up page: email access code, then account type.
//!
//! The chosen role is written through `POST /api/auth/role` and the returned
//! session is published before moving on to profile creation, so guards on
//! the next page already see the role.

use gates::policy::{CREATE_PROFILE_PATH, SIGN_IN_PATH};
use gates::{Role, SessionPayload};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::email_code_form::EmailCodeForm;
use crate::state::session::SessionState;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let signed_in = move || session.with(|s| s.snapshot().is_authenticated);

    let on_signed_in = move |payload: SessionPayload| {
        session.update(|s| {
            s.accept(payload);
        });
    };

    let choose = move |role: Role| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::set_role(role).await {
                    Ok(payload) => {
                        session.update(|s| {
                            s.accept(payload);
                        });
                        navigate(CREATE_PROFILE_PATH, NavigateOptions::default());
                    }
                    Err(e) => info.set(format!("Could not save account type: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (role, &navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <Show
                    when=signed_in
                    fallback=move || {
                        view! {
                            <EmailCodeForm on_signed_in=on_signed_in/>
                            <p class="auth-card__footer">
                                "Already registered? "
                                <a href=SIGN_IN_PATH>"Sign in"</a>
                            </p>
                        }
                    }
                >
                    <p class="auth-card__subtitle">"How will you use Guildustry?"</p>
                    <div class="auth-card__choices">
                        <button
                            class="btn btn--primary"
                            disabled=move || busy.get()
                            on:click={
                                let choose = choose.clone();
                                move |_| choose(Role::Candidate)
                            }
                        >
                            "I'm looking for work"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || busy.get()
                            on:click={
                                let choose = choose.clone();
                                move |_| choose(Role::Employer)
                            }
                        >
                            "I'm hiring"
                        </button>
                    </div>
                    <Show when=move || !info.get().is_empty()>
                        <p class="auth-card__message">{move || info.get()}</p>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
