//! Multi-step profile creation wizard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the onboarding entry page and by `/profile/create`. Field
//! edits go through `ProfileForm`, which keeps the wizard's step validity in
//! sync with the draft. Submit persists the draft, refreshes the session so
//! `has_profile` flips, and then calls `on_complete`.
//!
//! A submit still in flight when the wizard unmounts is dropped: the
//! liveness flag is cleared on cleanup and the late result is never applied.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gates::{ProfileDraft, ProfileStep, Role, SubmitOutcome, WizardEvent};
use leptos::prelude::*;

use crate::state::profile_form::ProfileForm;
use crate::state::session::SessionState;

fn parse_years(raw: &str) -> Option<u16> {
    raw.trim().parse().ok()
}

#[component]
pub fn ProfileWizard(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let initial_role = session.with_untracked(|s| s.snapshot().role);
    let form = match ProfileForm::new(initial_role) {
        Ok(form) => RwSignal::new(form),
        Err(e) => return view! { <p class="wizard__error">{e.to_string()}</p> }.into_any(),
    };

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || {
            alive.store(false, Ordering::Relaxed);
            form.try_update(ProfileForm::abandon);
        }
    });

    let view_state = Memo::new(move |_| form.with(ProfileForm::view));
    let step = Memo::new(move |_| form.with(ProfileForm::step));
    let role = Memo::new(move |_| form.with(|f| f.draft().role));

    let on_back = move |_| {
        form.update(|f| {
            f.dispatch(WizardEvent::Back);
        });
    };
    let on_next = move |_| {
        form.update(|f| {
            f.dispatch(WizardEvent::Next);
        });
    };
    let on_submit = move |_| {
        let Some(draft) = form.try_update(|f| f.dispatch(WizardEvent::Submit)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_profile(&draft).await.map(|_| ());
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                if let Err(e) = &result {
                    log::warn!("profile submit failed: {e}");
                }
                if form.try_update(|f| f.resolve(result)) == Some(SubmitOutcome::Persisted) {
                    crate::state::session::reload_session(session).await;
                    if alive.load(Ordering::Relaxed) {
                        on_complete.run(());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, &alive, on_complete);
    };

    let edit = move |apply: fn(&mut ProfileDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| f.edit(|d| apply(d, value)));
        }
    };
    let field = move |read: fn(&ProfileDraft) -> String| move || form.with(|f| read(f.draft()));
    let pending = move || view_state.get().pending;

    let role_button = move |choice: Role, label: &'static str| {
        view! {
            <button
                type="button"
                class="wizard__choice"
                class:wizard__choice--selected=move || form.with(|f| f.draft().role == choice)
                disabled=pending
                on:click=move |_| form.update(|f| f.edit(|d| d.role = choice))
            >
                {label}
            </button>
        }
    };

    let step_body = move || match step.get() {
        ProfileStep::AccountType => view! {
            <div class="wizard__choices">
                {role_button(Role::Candidate, "I'm looking for work")}
                {role_button(Role::Employer, "I'm hiring")}
            </div>
        }
        .into_any(),
        ProfileStep::Basics => view! {
            <div class="wizard__fields">
                <label class="wizard__field">
                    "Full name"
                    <input type="text" prop:value=field(|d| d.full_name.clone()) on:input=edit(|d, v| d.full_name = v)/>
                </label>
                <label class="wizard__field">
                    "Location"
                    <input type="text" prop:value=field(|d| d.location.clone()) on:input=edit(|d, v| d.location = v)/>
                </label>
            </div>
        }
        .into_any(),
        ProfileStep::Details => {
            if role.get() == Role::Employer {
                view! {
                    <div class="wizard__fields">
                        <label class="wizard__field">
                            "Company name"
                            <input
                                type="text"
                                prop:value=field(|d| d.company_name.clone())
                                on:input=edit(|d, v| d.company_name = v)
                            />
                        </label>
                        <label class="wizard__field">
                            "Hiring for"
                            <input
                                type="text"
                                prop:value=field(|d| d.hiring_for.clone())
                                on:input=edit(|d, v| d.hiring_for = v)
                            />
                        </label>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="wizard__fields">
                        <label class="wizard__field">
                            "Trade"
                            <input type="text" prop:value=field(|d| d.trade.clone()) on:input=edit(|d, v| d.trade = v)/>
                        </label>
                        <label class="wizard__field">
                            "Years of experience"
                            <input
                                type="number"
                                min="0"
                                prop:value=field(|d| d.years_experience.map(|y| y.to_string()).unwrap_or_default())
                                on:input=edit(|d, v| d.years_experience = parse_years(&v))
                            />
                        </label>
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="wizard">
            <p class="wizard__progress">
                {move || {
                    let v = view_state.get();
                    format!("Step {} of {}: {}", v.step_index + 1, v.step_count, step.get().title())
                }}
            </p>
            <fieldset class="wizard__step" disabled=pending>
                {step_body}
            </fieldset>
            <Show when=move || form.with(|f| f.step_hint().is_some())>
                <p class="wizard__hint">{move || form.with(ProfileForm::step_hint).unwrap_or_default()}</p>
            </Show>
            <Show when=move || view_state.get().error.is_some()>
                <p class="wizard__error">
                    "Could not save your profile: "
                    {move || view_state.get().error.unwrap_or_default()}
                </p>
            </Show>
            <div class="wizard__actions">
                <button class="btn" disabled=move || !view_state.get().can_back on:click=on_back>
                    "Back"
                </button>
                <Show
                    when=move || view_state.get().is_last
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--primary"
                                disabled=move || !view_state.get().can_next || pending()
                                on:click=on_next
                            >
                                "Next"
                            </button>
                        }
                    }
                >
                    <button
                        class="btn btn--primary"
                        disabled=move || !view_state.get().can_submit
                        on:click=on_submit.clone()
                    >
                        {move || if pending() { "Saving..." } else { "Create profile" }}
                    </button>
                </Show>
            </div>
        </div>
    }
    .into_any()
}
