use super::*;
use gates::Role;
use serde_json::json;

fn user(metadata: serde_json::Value, has_profile: bool) -> SessionUser {
    SessionUser {
        id: Uuid::nil(),
        name: "ada".into(),
        email: Some("ada@example.com".into()),
        metadata,
        has_profile,
    }
}

// =============================================================================
// bytes_to_hex / generate_token
// =============================================================================

#[test]
fn bytes_to_hex_pads_each_byte() {
    assert_eq!(bytes_to_hex(&[]), "");
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn role_reads_canonical_key() {
    assert_eq!(user(json!({ "role": "employer" }), false).role(), Role::Employer);
}

#[test]
fn role_reads_legacy_key() {
    assert_eq!(user(json!({ "user_type": "candidate" }), false).role(), Role::Candidate);
}

#[test]
fn role_conflict_is_unset() {
    assert_eq!(user(json!({ "role": "employer", "user_type": "candidate" }), false).role(), Role::None);
}

#[test]
fn payload_carries_identity_role_and_profile() {
    let payload = user(json!({ "role": "candidate" }), true).payload();
    assert!(payload.authenticated);
    assert_eq!(payload.role, Role::Candidate);
    assert!(payload.has_profile);
    let identity = payload.user.expect("identity");
    assert_eq!(identity.id, Uuid::nil().to_string());
    assert_eq!(identity.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn snapshot_for_missing_user_is_signed_out() {
    assert_eq!(snapshot_for(None), SessionSnapshot::signed_out());
}

#[test]
fn snapshot_for_user_is_signed_in() {
    let u = user(json!({ "role": "employer" }), false);
    assert_eq!(snapshot_for(Some(&u)), SessionSnapshot::signed_in(Role::Employer, false));
}
