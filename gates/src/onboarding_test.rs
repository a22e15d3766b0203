use super::*;
use crate::session::Role;

#[test]
fn route_is_total_over_all_flag_combinations() {
    for loading in [false, true] {
        for is_authenticated in [false, true] {
            for has_profile in [false, true] {
                let snapshot = SessionSnapshot { loading, is_authenticated, role: Role::None, has_profile };
                let expected = if loading {
                    OnboardingRoute::Pending
                } else if !is_authenticated {
                    OnboardingRoute::SignIn
                } else if has_profile {
                    OnboardingRoute::ViewProfile
                } else {
                    OnboardingRoute::CreateProfile
                };
                assert_eq!(route(&snapshot), expected, "{snapshot:?}");
            }
        }
    }
}

#[test]
fn route_does_not_depend_on_role() {
    for role in [Role::None, Role::Candidate, Role::Employer] {
        assert_eq!(route(&SessionSnapshot::signed_in(role, false)), OnboardingRoute::CreateProfile);
        assert_eq!(route(&SessionSnapshot::signed_in(role, true)), OnboardingRoute::ViewProfile);
    }
}

#[test]
fn mount_switches_to_view_profile_when_profile_appears() {
    let mut mount = OnboardingMount::new();
    assert_eq!(mount.current(), OnboardingRoute::Pending);

    let created = mount.observe(SessionVersion(1), &SessionSnapshot::signed_in(Role::Candidate, false));
    assert_eq!(created, Some(OnboardingRoute::CreateProfile));

    let viewed = mount.observe(SessionVersion(2), &SessionSnapshot::signed_in(Role::Candidate, true));
    assert_eq!(viewed, Some(OnboardingRoute::ViewProfile));
    assert_eq!(mount.current(), OnboardingRoute::ViewProfile);
}

#[test]
fn mount_repeated_snapshot_is_idempotent() {
    let mut mount = OnboardingMount::new();
    let snapshot = SessionSnapshot::signed_out();
    assert_eq!(mount.observe(SessionVersion(1), &snapshot), Some(OnboardingRoute::SignIn));
    assert_eq!(mount.observe(SessionVersion(2), &snapshot), None);
    assert_eq!(mount.observe(SessionVersion(2), &snapshot), None);
    assert_eq!(mount.current(), OnboardingRoute::SignIn);
}

#[test]
fn mount_ignores_stale_versions() {
    let mut mount = OnboardingMount::new();
    mount.observe(SessionVersion(3), &SessionSnapshot::signed_in(Role::Employer, true));
    assert_eq!(mount.observe(SessionVersion(2), &SessionSnapshot::signed_out()), None);
    assert_eq!(mount.current(), OnboardingRoute::ViewProfile);
}

#[test]
fn mount_loading_first_reports_nothing_new() {
    let mut mount = OnboardingMount::new();
    assert_eq!(mount.observe(SessionVersion(1), &SessionSnapshot::loading()), None);
    assert_eq!(mount.current(), OnboardingRoute::Pending);
}
