//! Form state behind the profile wizard page.
//!
//! Pairs the editable `ProfileDraft` with the `Wizard` controller. Every edit
//! recomputes step validity from the draft, so the wizard's Next/Submit gates
//! always reflect what the user has typed.

#[cfg(test)]
#[path = "profile_form_test.rs"]
mod profile_form_test;

use gates::{ProfileDraft, ProfileStep, Role, SubmitOutcome, Wizard, WizardEffect, WizardError, WizardEvent, WizardView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    draft: ProfileDraft,
    wizard: Wizard,
}

impl ProfileForm {
    /// Start a wizard at the first step, pre-selecting `role` if known.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError`] if the step list is empty.
    pub fn new(role: Role) -> Result<Self, WizardError> {
        let draft = ProfileDraft::for_role(role);
        let wizard = Wizard::with_validity(draft.step_validity())?;
        Ok(Self { draft, wizard })
    }

    #[must_use]
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    #[must_use]
    pub fn view(&self) -> WizardView {
        self.wizard.view()
    }

    #[must_use]
    pub fn step(&self) -> ProfileStep {
        ProfileStep::at(self.wizard.step_index()).unwrap_or(ProfileStep::AccountType)
    }

    /// Problem on the current step, for inline hints.
    #[must_use]
    pub fn step_hint(&self) -> Option<String> {
        self.draft.check_step(self.step()).err().map(|e| e.to_string())
    }

    /// Apply a field edit. Ignored while a submit is pending.
    pub fn edit(&mut self, apply: impl FnOnce(&mut ProfileDraft)) {
        if self.wizard.is_pending() {
            return;
        }
        apply(&mut self.draft);
        let validity = self.draft.step_validity();
        // Same step list as at construction, so lengths always match.
        let _ = self.wizard.set_validity(&validity);
    }

    /// Forward a navigation event. Returns the draft to persist when the
    /// event starts a submit.
    pub fn dispatch(&mut self, event: WizardEvent) -> Option<ProfileDraft> {
        match self.wizard.dispatch(event) {
            WizardEffect::Persist => Some(self.draft.normalized()),
            WizardEffect::None | WizardEffect::Moved { .. } => None,
        }
    }

    pub fn resolve(&mut self, result: Result<(), String>) -> SubmitOutcome {
        self.wizard.resolve_submit(result)
    }

    pub fn abandon(&mut self) {
        self.wizard.abandon();
    }
}
