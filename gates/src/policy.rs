//! Route groups and the fixed policy attached to each.
//!
//! DESIGN
//! ======
//! `RoutePolicy::required_role` has no default. Every group states its role
//! requirement explicitly, so an auth-only group is a visible `Any` rather than
//! a forgotten check.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::session::Role;

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/auth/sign-in";
pub const SIGN_UP_PATH: &str = "/auth/sign-up";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const CANDIDATE_DASHBOARD_PATH: &str = "/candidate/dashboard";
pub const EMPLOYER_DASHBOARD_PATH: &str = "/employer/dashboard";
pub const PROFILE_ENTRY_PATH: &str = "/profile";
pub const CREATE_PROFILE_PATH: &str = "/profile/create";
pub const VIEW_PROFILE_PATH: &str = "/profile/view";

/// Role a route group demands of its viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequiredRole {
    Any,
    Candidate,
    Employer,
}

impl RequiredRole {
    /// Whether a viewer with `role` satisfies this requirement.
    #[must_use]
    pub fn admits(self, role: Role) -> bool {
        match self {
            Self::Any => true,
            Self::Candidate => role == Role::Candidate,
            Self::Employer => role == Role::Employer,
        }
    }
}

/// Static requirement attached to a guarded route group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoutePolicy {
    pub required_role: RequiredRole,
    pub requires_profile: bool,
}

impl RoutePolicy {
    #[must_use]
    pub const fn new(required_role: RequiredRole, requires_profile: bool) -> Self {
        Self { required_role, requires_profile }
    }
}

/// Guarded route groups. Public pages and the `/profile` entry point are not
/// listed here; the latter goes through the onboarding router instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteGroup {
    Dashboard,
    Candidate,
    Employer,
    ProfileCreate,
    ProfileView,
}

impl RouteGroup {
    pub const ALL: [Self; 5] = [Self::Dashboard, Self::Candidate, Self::Employer, Self::ProfileCreate, Self::ProfileView];

    #[must_use]
    pub const fn policy(self) -> RoutePolicy {
        match self {
            Self::Dashboard | Self::ProfileCreate => RoutePolicy::new(RequiredRole::Any, false),
            Self::Candidate => RoutePolicy::new(RequiredRole::Candidate, false),
            Self::Employer => RoutePolicy::new(RequiredRole::Employer, false),
            Self::ProfileView => RoutePolicy::new(RequiredRole::Any, true),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Candidate => "candidate",
            Self::Employer => "employer",
            Self::ProfileCreate => "profile_create",
            Self::ProfileView => "profile_view",
        }
    }

    /// Map a request path (no query string) to its guarded group.
    ///
    /// Returns `None` for public pages and unknown paths.
    #[must_use]
    pub fn for_path(path: &str) -> Option<Self> {
        let path = normalize_path(path);
        if path == DASHBOARD_PATH {
            Some(Self::Dashboard)
        } else if is_under(path, "/candidate") {
            Some(Self::Candidate)
        } else if is_under(path, "/employer") {
            Some(Self::Employer)
        } else if path == CREATE_PROFILE_PATH {
            Some(Self::ProfileCreate)
        } else if path == VIEW_PROFILE_PATH {
            Some(Self::ProfileView)
        } else {
            None
        }
    }
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.len() > 1 { path.trim_end_matches('/') } else { path }
}

fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}
