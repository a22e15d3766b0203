use super::*;

#[test]
fn normalize_code_input_uppercases_and_trims() {
    assert_eq!(normalize_code_input(" abc234 "), "ABC234");
}

#[test]
fn validate_request_code_input_trims_and_requires_value() {
    assert_eq!(validate_request_code_input("  user@example.com  "), Ok("user@example.com".to_owned()));
    assert_eq!(validate_request_code_input("   "), Err(MISSING_EMAIL));
}

#[test]
fn validate_verify_code_input_requires_both_fields() {
    assert_eq!(
        validate_verify_code_input(" a@b.com ", " abc234 "),
        Ok(("a@b.com".to_owned(), "ABC234".to_owned()))
    );
    assert_eq!(validate_verify_code_input("", "abc234"), Err(MISSING_CODE));
    assert_eq!(validate_verify_code_input("a@b.com", "   "), Err(MISSING_CODE));
}

#[test]
fn validate_verify_code_input_rejects_wrong_length() {
    assert_eq!(validate_verify_code_input("a@b.com", "ABCDE"), Err(MISSING_CODE));
    assert_eq!(validate_verify_code_input("a@b.com", "ABCDEFG"), Err(MISSING_CODE));
}
