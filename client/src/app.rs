//! Root application component with routing and context providers.

use gates::RouteGroup;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::components::route_guard::RouteGuard;
use crate::pages::about::AboutPage;
use crate::pages::candidate::CandidateDashboardPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::employer::{EmployerApplicantsPage, EmployerDashboardPage, EmployerJobsPage, PostJobPage};
use crate::pages::home::HomePage;
use crate::pages::profile::{CreateProfilePage, ProfileEntryPage, ViewProfilePage};
use crate::pages::sign_in::SignInPage;
use crate::pages::sign_up::SignUpPage;
use crate::state::session::{SessionState, refresh_session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and starts the first session fetch. Guarded
/// route groups wrap their pages (or, for `/candidate` and `/employer`,
/// their whole subtree) in `RouteGuard`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    refresh_session(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/guildustry.css"/>
        <Title text="Guildustry"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("sign-in")) view=SignInPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("sign-up")) view=SignUpPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RouteGuard group=RouteGroup::Dashboard><DashboardPage/></RouteGuard> }
                />
                <ParentRoute
                    path=StaticSegment("candidate")
                    view=|| view! { <RouteGuard group=RouteGroup::Candidate><Outlet/></RouteGuard> }
                >
                    <Route path=StaticSegment("dashboard") view=CandidateDashboardPage/>
                </ParentRoute>
                <ParentRoute
                    path=StaticSegment("employer")
                    view=|| view! { <RouteGuard group=RouteGroup::Employer><Outlet/></RouteGuard> }
                >
                    <Route path=StaticSegment("dashboard") view=EmployerDashboardPage/>
                    <Route path=StaticSegment("jobs") view=EmployerJobsPage/>
                    <Route path=StaticSegment("applicants") view=EmployerApplicantsPage/>
                    <Route path=StaticSegment("post-job") view=PostJobPage/>
                </ParentRoute>
                <Route path=StaticSegment("profile") view=ProfileEntryPage/>
                <Route
                    path=(StaticSegment("profile"), StaticSegment("create"))
                    view=|| view! { <RouteGuard group=RouteGroup::ProfileCreate><CreateProfilePage/></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("profile"), StaticSegment("view"))
                    view=|| view! { <RouteGuard group=RouteGroup::ProfileView><ViewProfilePage/></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}
