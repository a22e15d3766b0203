//! Read-only view of the stored profile.

use gates::{ProfileDraft, Role};
use leptos::prelude::*;

pub(crate) fn role_label(role: Role) -> &'static str {
    match role {
        Role::Candidate => "Candidate",
        Role::Employer => "Employer",
        Role::None => "No account type",
    }
}

/// Label/value rows shown for a profile, in display order.
pub(crate) fn summary_rows(profile: &ProfileDraft) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Account type", role_label(profile.role).to_owned()),
        ("Name", profile.full_name.clone()),
        ("Location", profile.location.clone()),
    ];
    match profile.role {
        Role::Candidate => {
            rows.push(("Trade", profile.trade.clone()));
            let years = profile.years_experience.map(|y| y.to_string()).unwrap_or_default();
            rows.push(("Years of experience", years));
        }
        Role::Employer => {
            rows.push(("Company", profile.company_name.clone()));
            rows.push(("Hiring for", profile.hiring_for.clone()));
        }
        Role::None => {}
    }
    rows
}

#[component]
pub fn ProfileSummary() -> impl IntoView {
    let profile = LocalResource::new(|| crate::net::api::fetch_profile());

    view! {
        <section class="profile-summary">
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(Some(p)) => {
                                view! {
                                    <dl class="profile-summary__rows">
                                        {summary_rows(&p)
                                            .into_iter()
                                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                            .collect_view()}
                                    </dl>
                                }
                                    .into_any()
                            }
                            Ok(None) => view! { <p>"No profile yet."</p> }.into_any(),
                            Err(e) => view! { <p class="profile-summary__error">{e}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}
