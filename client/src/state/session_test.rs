use super::*;
use gates::Role;

fn signed_in(role: Role, has_profile: bool) -> SessionPayload {
    SessionPayload {
        authenticated: true,
        user: Some(SessionIdentity { id: "u1".to_owned(), name: "Ada".to_owned(), email: None }),
        role,
        has_profile,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_loading_at_version_zero() {
    let state = SessionState::default();
    assert!(state.snapshot().loading);
    assert_eq!(state.version(), SessionVersion(0));
    assert!(state.user().is_none());
}

// =============================================================
// Refresh ordering
// =============================================================

#[test]
fn completed_refresh_publishes_a_new_version() {
    let mut state = SessionState::default();
    let ticket = state.begin_refresh();
    let version = state.complete_refresh(ticket, Ok(signed_in(Role::Candidate, false)));
    assert_eq!(version, Some(SessionVersion(1)));
    assert_eq!(state.snapshot(), SessionSnapshot::signed_in(Role::Candidate, false));
    assert_eq!(state.user().map(|u| u.name.as_str()), Some("Ada"));
}

#[test]
fn older_refresh_landing_late_is_dropped() {
    let mut state = SessionState::default();
    let first = state.begin_refresh();
    let second = state.begin_refresh();
    state.complete_refresh(second, Ok(signed_in(Role::Employer, true)));
    assert_eq!(state.complete_refresh(first, Ok(SessionPayload::signed_out())), None);
    assert_eq!(state.snapshot(), SessionSnapshot::signed_in(Role::Employer, true));
}

#[test]
fn sign_out_supersedes_refresh_in_flight() {
    let mut state = SessionState::default();
    let pending = state.begin_refresh();
    state.sign_out();
    assert_eq!(state.complete_refresh(pending, Ok(signed_in(Role::Candidate, true))), None);
    assert_eq!(state.snapshot(), SessionSnapshot::signed_out());
}

#[test]
fn failed_refresh_publishes_signed_out() {
    let mut state = SessionState::default();
    let ticket = state.begin_refresh();
    state.complete_refresh(ticket, Err("offline".to_owned()));
    let snapshot = state.snapshot();
    assert!(!snapshot.loading);
    assert!(!snapshot.is_authenticated);
}

// =============================================================
// accept
// =============================================================

#[test]
fn accept_bumps_version_every_time() {
    let mut state = SessionState::default();
    let a = state.accept(signed_in(Role::None, false));
    let b = state.accept(signed_in(Role::Candidate, false));
    assert!(b > a);
    assert_eq!(state.snapshot().role, Role::Candidate);
}

#[test]
fn unauthenticated_payload_drops_identity() {
    let mut state = SessionState::default();
    state.accept(signed_in(Role::Candidate, true));
    let mut stray = signed_in(Role::Candidate, true);
    stray.authenticated = false;
    state.accept(stray);
    assert!(state.user().is_none());
    assert_eq!(state.snapshot(), SessionSnapshot::signed_out());
}
