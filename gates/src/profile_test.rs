use super::*;
use crate::wizard::{WizardEffect, WizardEvent, Wizard};

fn candidate() -> ProfileDraft {
    ProfileDraft {
        role: Role::Candidate,
        full_name: "Ada Weld".to_owned(),
        location: "Duluth, MN".to_owned(),
        trade: "Pipefitter".to_owned(),
        years_experience: Some(7),
        ..ProfileDraft::default()
    }
}

fn employer() -> ProfileDraft {
    ProfileDraft {
        role: Role::Employer,
        full_name: "Sam Foreman".to_owned(),
        location: "Tulsa, OK".to_owned(),
        company_name: "Foreman Fabrication".to_owned(),
        hiring_for: "Welders".to_owned(),
        ..ProfileDraft::default()
    }
}

#[test]
fn step_lookup_by_index() {
    assert_eq!(ProfileStep::at(0), Some(ProfileStep::AccountType));
    assert_eq!(ProfileStep::at(2), Some(ProfileStep::Details));
    assert_eq!(ProfileStep::at(3), None);
}

#[test]
fn empty_draft_has_no_valid_steps() {
    assert_eq!(ProfileDraft::default().step_validity(), vec![false, false, false]);
}

#[test]
fn for_role_prefills_account_type_only() {
    assert_eq!(ProfileDraft::for_role(Role::Employer).step_validity(), vec![true, false, false]);
}

#[test]
fn complete_drafts_validate() {
    assert_eq!(candidate().validate(), Ok(()));
    assert_eq!(employer().validate(), Ok(()));
}

#[test]
fn basics_requires_name_and_location() {
    let mut draft = candidate();
    draft.full_name = "   ".to_owned();
    assert_eq!(draft.check_step(ProfileStep::Basics), Err(ProfileError::MissingField("full name")));
    draft.full_name = "Ada".to_owned();
    draft.location.clear();
    assert_eq!(draft.check_step(ProfileStep::Basics), Err(ProfileError::MissingField("location")));
}

#[test]
fn text_fields_are_length_limited() {
    let mut draft = employer();
    draft.company_name = "x".repeat(MAX_TEXT_LEN + 1);
    assert_eq!(
        draft.check_step(ProfileStep::Details),
        Err(ProfileError::TooLong { field: "company name", max: MAX_TEXT_LEN })
    );
}

#[test]
fn candidate_details_require_years_in_range() {
    let mut draft = candidate();
    draft.years_experience = None;
    assert_eq!(
        draft.check_step(ProfileStep::Details),
        Err(ProfileError::MissingField("years of experience"))
    );
    draft.years_experience = Some(MAX_YEARS_EXPERIENCE + 1);
    assert_eq!(draft.check_step(ProfileStep::Details), Err(ProfileError::YearsOutOfRange));
    draft.years_experience = Some(0);
    assert!(draft.is_step_valid(ProfileStep::Details));
}

#[test]
fn details_depend_on_chosen_role() {
    let mut draft = candidate();
    draft.role = Role::Employer;
    assert_eq!(draft.check_step(ProfileStep::Details), Err(ProfileError::MissingField("company name")));
    draft.role = Role::None;
    assert_eq!(draft.check_step(ProfileStep::Details), Err(ProfileError::MissingRole));
}

#[test]
fn normalized_trims_and_drops_other_role_fields() {
    let mut draft = candidate();
    draft.full_name = "  Ada Weld  ".to_owned();
    draft.company_name = "Leftover Co".to_owned();
    let normalized = draft.normalized();
    assert_eq!(normalized.full_name, "Ada Weld");
    assert_eq!(normalized.company_name, "");
    assert_eq!(normalized.trade, "Pipefitter");
}

#[test]
fn draft_deserializes_with_missing_optional_fields() {
    let draft: ProfileDraft = serde_json::from_value(serde_json::json!({
        "role": "employer",
        "full_name": "Sam",
    }))
    .expect("draft");
    assert_eq!(draft.role, Role::Employer);
    assert_eq!(draft.location, "");
    assert_eq!(draft.years_experience, None);
}

#[test]
fn draft_validity_drives_wizard_to_submit() {
    let mut draft = ProfileDraft::default();
    let mut wizard = Wizard::new(ProfileStep::ALL.len()).expect("wizard");

    assert_eq!(wizard.dispatch(WizardEvent::Next), WizardEffect::None);
    draft.role = Role::Candidate;
    wizard.set_validity(&draft.step_validity()).expect("validity");
    assert_eq!(wizard.dispatch(WizardEvent::Next), WizardEffect::Moved { from: 0, to: 1 });

    draft.full_name = "Ada".to_owned();
    draft.location = "Duluth".to_owned();
    wizard.set_validity(&draft.step_validity()).expect("validity");
    assert_eq!(wizard.dispatch(WizardEvent::Next), WizardEffect::Moved { from: 1, to: 2 });

    assert_eq!(wizard.dispatch(WizardEvent::Submit), WizardEffect::None);
    draft.trade = "Electrician".to_owned();
    draft.years_experience = Some(3);
    wizard.set_validity(&draft.step_validity()).expect("validity");
    assert_eq!(wizard.dispatch(WizardEvent::Submit), WizardEffect::Persist);
}
