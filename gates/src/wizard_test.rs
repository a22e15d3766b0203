use super::*;

fn at_last_step(validity: Vec<bool>) -> Wizard {
    let mut wizard = Wizard::with_validity(vec![true; validity.len()]).expect("wizard");
    while !wizard.is_last() {
        wizard.dispatch(WizardEvent::Next);
    }
    wizard.set_validity(&validity).expect("validity");
    wizard
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn new_rejects_zero_steps() {
    assert_eq!(Wizard::new(0), Err(WizardError::NoSteps));
    assert_eq!(Wizard::with_validity(Vec::new()), Err(WizardError::NoSteps));
}

#[test]
fn new_starts_at_first_step_with_invalid_steps() {
    let wizard = Wizard::new(3).expect("wizard");
    assert_eq!(wizard.step_index(), 0);
    assert_eq!(wizard.step_validity(), &[false, false, false]);
    assert!(!wizard.can_back());
    assert!(!wizard.can_next());
    assert!(!wizard.is_last());
}

#[test]
fn single_step_wizard_is_last_immediately() {
    let wizard = Wizard::with_validity(vec![true]).expect("wizard");
    assert!(wizard.is_last());
    assert!(wizard.can_submit());
}

#[test]
fn set_validity_rejects_length_mismatch() {
    let mut wizard = Wizard::new(3).expect("wizard");
    assert_eq!(wizard.set_validity(&[true]), Err(WizardError::ValidityLength { got: 1, expected: 3 }));
}

// =============================================================================
// Next / Back
// =============================================================================

#[test]
fn three_step_scenario_next_noop_back() {
    let mut wizard = Wizard::with_validity(vec![true, false, true]).expect("wizard");
    assert_eq!(wizard.dispatch(WizardEvent::Next), WizardEffect::Moved { from: 0, to: 1 });
    assert_eq!(wizard.step_index(), 1);
    assert_eq!(wizard.dispatch(WizardEvent::Next), WizardEffect::None);
    assert_eq!(wizard.step_index(), 1);
    assert_eq!(wizard.dispatch(WizardEvent::Back), WizardEffect::Moved { from: 1, to: 0 });
    assert_eq!(wizard.step_index(), 0);
}

#[test]
fn next_while_invalid_never_moves() {
    for index in 0..3 {
        let mut wizard = Wizard::with_validity(vec![true; 3]).expect("wizard");
        for _ in 0..index {
            wizard.dispatch(WizardEvent::Next);
        }
        let mut validity = vec![true; 3];
        validity[index] = false;
        wizard.set_validity(&validity).expect("matching length");
        for _ in 0..3 {
            assert_eq!(wizard.dispatch(WizardEvent::Next), WizardEffect::None);
        }
        assert_eq!(wizard.step_index(), index);
    }
}

#[test]
fn next_on_last_step_is_noop() {
    let mut wizard = at_last_step(vec![true, true]);
    assert_eq!(wizard.dispatch(WizardEvent::Next), WizardEffect::None);
    assert_eq!(wizard.step_index(), 1);
}

#[test]
fn back_from_first_step_is_noop() {
    let mut wizard = Wizard::with_validity(vec![true, true]).expect("wizard");
    assert_eq!(wizard.dispatch(WizardEvent::Back), WizardEffect::None);
    assert_eq!(wizard.step_index(), 0);
}

#[test]
fn back_ignores_validity() {
    let mut wizard = at_last_step(vec![false, false, false]);
    assert_eq!(wizard.dispatch(WizardEvent::Back), WizardEffect::Moved { from: 2, to: 1 });
}

// =============================================================================
// Submit
// =============================================================================

#[test]
fn submit_only_from_valid_last_step() {
    let mut first = Wizard::with_validity(vec![true, true]).expect("wizard");
    assert_eq!(first.dispatch(WizardEvent::Submit), WizardEffect::None);

    let mut invalid_last = at_last_step(vec![true, false]);
    assert_eq!(invalid_last.dispatch(WizardEvent::Submit), WizardEffect::None);
    assert_eq!(invalid_last.phase(), &SubmitPhase::Idle);

    let mut ready = at_last_step(vec![true, true]);
    assert_eq!(ready.dispatch(WizardEvent::Submit), WizardEffect::Persist);
    assert!(ready.is_pending());
}

#[test]
fn pending_submit_blocks_every_event() {
    let mut wizard = at_last_step(vec![true, true, true]);
    assert_eq!(wizard.dispatch(WizardEvent::Submit), WizardEffect::Persist);
    for event in [WizardEvent::Back, WizardEvent::Next, WizardEvent::Submit] {
        assert_eq!(wizard.dispatch(event), WizardEffect::None);
    }
    assert_eq!(wizard.step_index(), 2);
    let view = wizard.view();
    assert!(view.pending);
    assert!(!view.can_back);
    assert!(!view.can_submit);
}

#[test]
fn failed_submit_keeps_step_and_validity() {
    let mut wizard = at_last_step(vec![true, false, true]);
    wizard.dispatch(WizardEvent::Submit);
    assert_eq!(wizard.resolve_submit(Err("store unavailable".to_owned())), SubmitOutcome::Failed);
    assert_eq!(wizard.step_index(), 2);
    assert_eq!(wizard.step_validity(), &[true, false, true]);
    assert_eq!(wizard.view().error.as_deref(), Some("store unavailable"));
}

#[test]
fn failed_submit_can_be_retried() {
    let mut wizard = at_last_step(vec![true, true]);
    wizard.dispatch(WizardEvent::Submit);
    wizard.resolve_submit(Err("timeout".to_owned()));
    assert_eq!(wizard.dispatch(WizardEvent::Submit), WizardEffect::Persist);
    assert_eq!(wizard.view().error, None);
    assert_eq!(wizard.resolve_submit(Ok(())), SubmitOutcome::Persisted);
    assert_eq!(wizard.phase(), &SubmitPhase::Idle);
}

#[test]
fn moving_away_clears_failure() {
    let mut wizard = at_last_step(vec![true, true]);
    wizard.dispatch(WizardEvent::Submit);
    wizard.resolve_submit(Err("nope".to_owned()));
    wizard.dispatch(WizardEvent::Back);
    assert_eq!(wizard.view().error, None);
}

#[test]
fn resolve_without_pending_submit_is_ignored() {
    let mut wizard = at_last_step(vec![true, true]);
    assert_eq!(wizard.resolve_submit(Ok(())), SubmitOutcome::Ignored);
    wizard.dispatch(WizardEvent::Submit);
    wizard.abandon();
    assert_eq!(wizard.resolve_submit(Err("late".to_owned())), SubmitOutcome::Ignored);
    assert_eq!(wizard.view().error, None);
}

#[test]
fn view_mirrors_state() {
    let wizard = Wizard::with_validity(vec![true, false]).expect("wizard");
    assert_eq!(
        wizard.view(),
        WizardView {
            step_index: 0,
            step_count: 2,
            can_back: false,
            can_next: true,
            is_last: false,
            can_submit: false,
            pending: false,
            error: None,
        }
    );
}
