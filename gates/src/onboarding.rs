//! Onboarding router for the `/profile` entry point.
//!
//! Unlike guarded groups, the entry point never redirects. It classifies the
//! session into one of four screens and renders that screen in place, so a
//! later snapshot (e.g. the profile was just saved) swaps the screen without
//! a page reload.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use crate::session::{SessionSnapshot, SessionVersion, VersionCursor};

/// Screen the profile entry point should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnboardingRoute {
    Pending,
    SignIn,
    CreateProfile,
    ViewProfile,
}

/// Classify a snapshot. Total over every field combination.
#[must_use]
pub fn route(snapshot: &SessionSnapshot) -> OnboardingRoute {
    match (snapshot.loading, snapshot.is_authenticated, snapshot.has_profile) {
        (true, _, _) => OnboardingRoute::Pending,
        (false, false, _) => OnboardingRoute::SignIn,
        (false, true, true) => OnboardingRoute::ViewProfile,
        (false, true, false) => OnboardingRoute::CreateProfile,
    }
}

/// Stateful reader held by the entry page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OnboardingMount {
    cursor: VersionCursor,
    current: OnboardingRoute,
}

impl Default for OnboardingMount {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingMount {
    #[must_use]
    pub fn new() -> Self {
        Self { cursor: VersionCursor::default(), current: OnboardingRoute::Pending }
    }

    /// Re-route for a newly published snapshot.
    ///
    /// Returns the new screen only when it differs from the current one;
    /// stale versions and repeated identical snapshots return `None`.
    pub fn observe(&mut self, version: SessionVersion, snapshot: &SessionSnapshot) -> Option<OnboardingRoute> {
        if !self.cursor.advance(version) {
            return None;
        }
        let next = route(snapshot);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    #[must_use]
    pub fn current(&self) -> OnboardingRoute {
        self.current
    }
}
