//! Multi-step profile wizard state machine.
//!
//! DESIGN
//! ======
//! States are `Step(i)` for `i` in `0..step_count`. There is no "submitted"
//! state: submit is a terminal action taken from the last step, tracked by a
//! small `SubmitPhase` sub-state while the store answers.
//!
//! Illegal events are no-ops. The rendering layer reflects them as disabled
//! controls through [`WizardView`]; nothing here returns an error for them.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

/// Construction and configuration errors. Navigation never errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("wizard needs at least one step")]
    NoSteps,
    #[error("validity has {got} entries, expected {expected}")]
    ValidityLength { got: usize, expected: usize },
}

/// User-driven navigation events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardEvent {
    Next,
    Back,
    Submit,
}

/// What the caller must do after a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardEffect {
    /// Event was illegal or ignored.
    None,
    Moved { from: usize, to: usize },
    /// Persist the draft and report back through [`Wizard::resolve_submit`].
    Persist,
}

/// Submit sub-state of the last step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Waiting on the store; the wizard is non-interactive.
    Pending,
    /// Last attempt failed; the reason is shown until the next attempt or move.
    Failed(String),
}

/// Result of feeding a store answer back into the wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Persisted,
    Failed,
    /// No submit was in flight (abandoned or already resolved).
    Ignored,
}

/// Read-only projection consumed by the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardView {
    pub step_index: usize,
    pub step_count: usize,
    pub can_back: bool,
    pub can_next: bool,
    pub is_last: bool,
    pub can_submit: bool,
    pub pending: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wizard {
    step_index: usize,
    step_validity: Vec<bool>,
    phase: SubmitPhase,
}

impl Wizard {
    /// Create a wizard on step 0 with every step invalid.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NoSteps`] when `step_count` is zero.
    pub fn new(step_count: usize) -> Result<Self, WizardError> {
        if step_count == 0 {
            return Err(WizardError::NoSteps);
        }
        Ok(Self { step_index: 0, step_validity: vec![false; step_count], phase: SubmitPhase::Idle })
    }

    /// Create a wizard with known per-step validity.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NoSteps`] for an empty validity list.
    pub fn with_validity(step_validity: Vec<bool>) -> Result<Self, WizardError> {
        if step_validity.is_empty() {
            return Err(WizardError::NoSteps);
        }
        Ok(Self { step_index: 0, step_validity, phase: SubmitPhase::Idle })
    }

    #[must_use]
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_validity.len()
    }

    #[must_use]
    pub fn step_validity(&self) -> &[bool] {
        &self.step_validity
    }

    #[must_use]
    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    #[must_use]
    pub fn can_back(&self) -> bool {
        self.step_index > 0
    }

    /// Whether the current step is complete.
    #[must_use]
    pub fn can_next(&self) -> bool {
        self.step_validity[self.step_index]
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.step_index + 1 == self.step_count()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, SubmitPhase::Pending)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_last() && self.can_next() && !self.is_pending()
    }

    /// Replace all step validity at once.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::ValidityLength`] when the length differs from the step count.
    pub fn set_validity(&mut self, validity: &[bool]) -> Result<(), WizardError> {
        if validity.len() != self.step_count() {
            return Err(WizardError::ValidityLength { got: validity.len(), expected: self.step_count() });
        }
        self.step_validity.copy_from_slice(validity);
        Ok(())
    }

    /// Apply a navigation event. Illegal events and any event while a submit
    /// is pending return [`WizardEffect::None`] and change nothing.
    pub fn dispatch(&mut self, event: WizardEvent) -> WizardEffect {
        if self.is_pending() {
            return WizardEffect::None;
        }
        match event {
            WizardEvent::Next => {
                if !self.can_next() || self.is_last() {
                    return WizardEffect::None;
                }
                self.move_to(self.step_index + 1)
            }
            WizardEvent::Back => {
                if !self.can_back() {
                    return WizardEffect::None;
                }
                self.move_to(self.step_index - 1)
            }
            WizardEvent::Submit => {
                if !self.can_submit() {
                    return WizardEffect::None;
                }
                self.phase = SubmitPhase::Pending;
                WizardEffect::Persist
            }
        }
    }

    fn move_to(&mut self, to: usize) -> WizardEffect {
        let from = self.step_index;
        self.step_index = to;
        self.phase = SubmitPhase::Idle;
        WizardEffect::Moved { from, to }
    }

    /// Feed the store's answer to an earlier [`WizardEffect::Persist`].
    ///
    /// On failure the wizard stays on the last step with validity intact and
    /// the reason recorded for display. Results arriving with no submit in
    /// flight are ignored.
    pub fn resolve_submit(&mut self, result: Result<(), String>) -> SubmitOutcome {
        if !self.is_pending() {
            return SubmitOutcome::Ignored;
        }
        match result {
            Ok(()) => {
                self.phase = SubmitPhase::Idle;
                SubmitOutcome::Persisted
            }
            Err(reason) => {
                self.phase = SubmitPhase::Failed(reason);
                SubmitOutcome::Failed
            }
        }
    }

    /// Drop any in-flight submit, e.g. when the wizard is unmounted.
    pub fn abandon(&mut self) {
        if self.is_pending() {
            self.phase = SubmitPhase::Idle;
        }
    }

    #[must_use]
    pub fn view(&self) -> WizardView {
        WizardView {
            step_index: self.step_index,
            step_count: self.step_count(),
            can_back: self.can_back() && !self.is_pending(),
            can_next: self.can_next(),
            is_last: self.is_last(),
            can_submit: self.can_submit(),
            pending: self.is_pending(),
            error: match &self.phase {
                SubmitPhase::Failed(reason) => Some(reason.clone()),
                SubmitPhase::Idle | SubmitPhase::Pending => None,
            },
        }
    }
}
