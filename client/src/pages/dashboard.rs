//! Generic dashboard, reachable by any signed-in account.

use gates::Role;
use gates::policy::{
    CANDIDATE_DASHBOARD_PATH, EMPLOYER_DASHBOARD_PATH, HOME_PATH, PROFILE_ENTRY_PATH, SIGN_UP_PATH,
};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::profile_summary::role_label;
use crate::state::session::SessionState;

/// Where the "Go to workspace" link points for a role. Accounts without a
/// role are sent to pick one.
pub(crate) fn role_home(role: Role) -> &'static str {
    match role {
        Role::Candidate => CANDIDATE_DASHBOARD_PATH,
        Role::Employer => EMPLOYER_DASHBOARD_PATH,
        Role::None => SIGN_UP_PATH,
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let role = move || session.with(|s| s.snapshot().role);
    let name = move || session.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome, {}", name())}</h1>
                <SignOutButton/>
            </header>
            <p>{move || role_label(role())}</p>
            <nav class="dashboard-page__links">
                <a class="btn btn--primary" href=move || role_home(role())>"Go to workspace"</a>
                <a class="btn" href=PROFILE_ENTRY_PATH>"My profile"</a>
            </nav>
        </div>
    }
}

/// Leave the guarded page before publishing the signed-out snapshot, so the
/// page's guard is gone and never redirects to sign-in.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn leave_then_sign_out(leave: impl FnOnce(&'static str), publish: impl FnOnce()) {
    leave(HOME_PATH);
    publish();
}

/// Ends the session and returns to the landing page.
#[component]
pub fn SignOutButton() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::logout().await {
                    log::warn!("logout failed: {e}");
                }
                busy.try_set(false);
                leave_then_sign_out(
                    |path| navigate(path, NavigateOptions::default()),
                    || {
                        session.update(|s| {
                            s.sign_out();
                        });
                    },
                );
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, &navigate);
    };

    view! {
        <button class="btn" disabled=move || busy.get() on:click=on_click>
            "Sign out"
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_home_routes_each_role() {
        assert_eq!(role_home(Role::Candidate), "/candidate/dashboard");
        assert_eq!(role_home(Role::Employer), "/employer/dashboard");
        assert_eq!(role_home(Role::None), "/auth/sign-up");
    }

    #[test]
    fn sign_out_navigates_home_before_publishing() {
        let steps = std::cell::RefCell::new(Vec::new());
        leave_then_sign_out(
            |path| steps.borrow_mut().push(format!("go {path}")),
            || steps.borrow_mut().push("signed out".to_owned()),
        );
        assert_eq!(steps.into_inner(), vec!["go /".to_owned(), "signed out".to_owned()]);
    }
}
