//! Email + access-code sign-in form.
//!
//! Shared by the sign-in page, the sign-up page and the onboarding entry
//! page. On success it hands the new session payload to `on_signed_in`; the
//! caller decides where to go next.

#[cfg(test)]
#[path = "email_code_form_test.rs"]
mod email_code_form_test;

use gates::SessionPayload;
use leptos::prelude::*;

pub(crate) const CODE_LEN: usize = 6;
const MISSING_EMAIL: &str = "Enter an email first.";
const MISSING_CODE: &str = "Enter both email and 6-char code.";

pub(crate) fn normalize_code_input(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

pub(crate) fn validate_request_code_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(MISSING_EMAIL);
    }
    Ok(email.to_owned())
}

pub(crate) fn validate_verify_code_input(email: &str, code: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let code = normalize_code_input(code);
    if email.is_empty() || code.len() != CODE_LEN {
        return Err(MISSING_CODE);
    }
    Ok((email.to_owned(), code))
}

#[component]
pub fn EmailCodeForm(#[prop(into)] on_signed_in: Callback<SessionPayload>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let echoed_code = RwSignal::new(None::<String>);

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_request_code_input(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Requesting code...".to_owned());
        echoed_code.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_code(&email_value).await {
                Ok(code_opt) => {
                    echoed_code.set(code_opt);
                    info.set("Code sent. Check your email.".to_owned());
                }
                Err(e) => info.set(format!("Code request failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email_value;
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, code_value) = match validate_verify_code_input(&email.get(), &code.get()) {
            Ok(pair) => pair,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Verifying code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_code(&email_value, &code_value).await {
                Ok(payload) => {
                    info.set(String::new());
                    busy.set(false);
                    on_signed_in.run(payload);
                }
                Err(e) => {
                    info.set(format!("Verification failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, code_value, on_signed_in);
    };

    view! {
        <div class="email-code">
            <form class="email-code__form" on:submit=on_request_code>
                <input
                    class="email-code__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Send code"
                </button>
            </form>
            <form class="email-code__form" on:submit=on_verify_code>
                <input
                    class="email-code__input email-code__input--code"
                    type="text"
                    maxlength="6"
                    placeholder="ABC234"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(normalize_code_input(&event_target_value(&ev)))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign in with code"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="email-code__message">{move || info.get()}</p>
            </Show>
            <Show when=move || echoed_code.get().is_some()>
                <p class="email-code__message email-code__message--code">
                    "Code: "
                    <span>{move || echoed_code.get().unwrap_or_default()}</span>
                </p>
            </Show>
        </div>
    }
}
