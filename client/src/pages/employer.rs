//! Employer workspace pages. All render under the employer route guard.

use leptos::prelude::*;

use super::dashboard::SignOutButton;

pub(crate) const EMPLOYER_LINKS: [(&str, &str); 4] = [
    ("/employer/dashboard", "Overview"),
    ("/employer/jobs", "Jobs"),
    ("/employer/applicants", "Applicants"),
    ("/employer/post-job", "Post a job"),
];

#[component]
fn EmployerShell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{title}</h1>
                <SignOutButton/>
            </header>
            <nav class="dashboard-page__links">
                {EMPLOYER_LINKS
                    .iter()
                    .map(|(href, label)| view! { <a class="btn" href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
            {children()}
        </div>
    }
}

#[component]
pub fn EmployerDashboardPage() -> impl IntoView {
    view! {
        <EmployerShell title="Employer dashboard">
            <p>"Your open roles and recent applicants will appear here."</p>
        </EmployerShell>
    }
}

#[component]
pub fn EmployerJobsPage() -> impl IntoView {
    view! {
        <EmployerShell title="Jobs">
            <p>"No jobs posted yet."</p>
        </EmployerShell>
    }
}

#[component]
pub fn EmployerApplicantsPage() -> impl IntoView {
    view! {
        <EmployerShell title="Applicants">
            <p>"No applicants yet."</p>
        </EmployerShell>
    }
}

#[component]
pub fn PostJobPage() -> impl IntoView {
    view! {
        <EmployerShell title="Post a job">
            <p>"Job posting is coming soon."</p>
        </EmployerShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gates::RouteGroup;

    #[test]
    fn every_employer_link_is_in_the_employer_group() {
        for (href, _) in EMPLOYER_LINKS {
            assert_eq!(RouteGroup::for_path(href), Some(RouteGroup::Employer), "{href}");
        }
    }
}
