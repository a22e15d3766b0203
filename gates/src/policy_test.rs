use super::*;

#[test]
fn required_role_any_admits_everyone() {
    for role in [Role::None, Role::Candidate, Role::Employer] {
        assert!(RequiredRole::Any.admits(role));
    }
}

#[test]
fn required_role_specific_admits_only_match() {
    assert!(RequiredRole::Employer.admits(Role::Employer));
    assert!(!RequiredRole::Employer.admits(Role::Candidate));
    assert!(!RequiredRole::Employer.admits(Role::None));
    assert!(RequiredRole::Candidate.admits(Role::Candidate));
    assert!(!RequiredRole::Candidate.admits(Role::Employer));
}

#[test]
fn group_policies_match_table() {
    assert_eq!(RouteGroup::Dashboard.policy(), RoutePolicy::new(RequiredRole::Any, false));
    assert_eq!(RouteGroup::Candidate.policy(), RoutePolicy::new(RequiredRole::Candidate, false));
    assert_eq!(RouteGroup::Employer.policy(), RoutePolicy::new(RequiredRole::Employer, false));
    assert_eq!(RouteGroup::ProfileCreate.policy(), RoutePolicy::new(RequiredRole::Any, false));
    assert_eq!(RouteGroup::ProfileView.policy(), RoutePolicy::new(RequiredRole::Any, true));
}

#[test]
fn for_path_maps_guarded_groups() {
    assert_eq!(RouteGroup::for_path("/dashboard"), Some(RouteGroup::Dashboard));
    assert_eq!(RouteGroup::for_path("/candidate/dashboard"), Some(RouteGroup::Candidate));
    assert_eq!(RouteGroup::for_path("/employer/jobs"), Some(RouteGroup::Employer));
    assert_eq!(RouteGroup::for_path("/employer/post-job"), Some(RouteGroup::Employer));
    assert_eq!(RouteGroup::for_path("/employer/applicants"), Some(RouteGroup::Employer));
    assert_eq!(RouteGroup::for_path("/profile/create"), Some(RouteGroup::ProfileCreate));
    assert_eq!(RouteGroup::for_path("/profile/view"), Some(RouteGroup::ProfileView));
}

#[test]
fn for_path_ignores_trailing_slash_and_query() {
    assert_eq!(RouteGroup::for_path("/dashboard/"), Some(RouteGroup::Dashboard));
    assert_eq!(RouteGroup::for_path("/employer/jobs?page=2"), Some(RouteGroup::Employer));
    assert_eq!(RouteGroup::for_path("/employer#top"), Some(RouteGroup::Employer));
}

#[test]
fn for_path_leaves_public_pages_unguarded() {
    assert_eq!(RouteGroup::for_path("/"), None);
    assert_eq!(RouteGroup::for_path("/about"), None);
    assert_eq!(RouteGroup::for_path(SIGN_IN_PATH), None);
    assert_eq!(RouteGroup::for_path(PROFILE_ENTRY_PATH), None);
}

#[test]
fn for_path_requires_segment_boundary() {
    assert_eq!(RouteGroup::for_path("/employers"), None);
    assert_eq!(RouteGroup::for_path("/candidates/list"), None);
    assert_eq!(RouteGroup::for_path("/dashboards"), None);
}

#[test]
fn redirect_targets_are_not_guarded_by_a_conflicting_role() {
    // Redirect targets must themselves admit the viewer they receive, or the
    // guards would bounce between them.
    let candidate_home = RouteGroup::for_path(CANDIDATE_DASHBOARD_PATH).map(RouteGroup::policy);
    assert_eq!(candidate_home.map(|p| p.required_role.admits(Role::Candidate)), Some(true));
    let generic_home = RouteGroup::for_path(DASHBOARD_PATH).map(RouteGroup::policy);
    for role in [Role::None, Role::Candidate, Role::Employer] {
        assert_eq!(generic_home.map(|p| p.required_role.admits(role)), Some(true));
    }
}
