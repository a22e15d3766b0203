//! Route guard evaluator and the mount that drives it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `evaluate` is the pure decision table. `GuardMount` is the stateful
//! wrapper a guarded subtree holds for its lifetime: it drops stale
//! snapshots and makes sure a redirect is issued once, not once per
//! re-evaluation.
//!
//! No outcome here is an error. Unauthenticated and wrong-role viewers are
//! redirected silently; there is no "unauthorized" screen.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::policy::{CANDIDATE_DASHBOARD_PATH, CREATE_PROFILE_PATH, DASHBOARD_PATH, RoutePolicy, SIGN_IN_PATH};
use crate::session::{Role, SessionSnapshot, SessionVersion, VersionCursor};

/// Result of evaluating one snapshot against one policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet; render nothing and do not navigate.
    Pending,
    Allow,
    Redirect(&'static str),
}

/// Decide whether a guarded route may render for `snapshot`.
#[must_use]
pub fn evaluate(snapshot: &SessionSnapshot, policy: RoutePolicy) -> GuardDecision {
    if snapshot.loading {
        return GuardDecision::Pending;
    }
    if !snapshot.is_authenticated {
        return GuardDecision::Redirect(SIGN_IN_PATH);
    }
    if !policy.required_role.admits(snapshot.role) {
        return match snapshot.role {
            Role::Candidate => GuardDecision::Redirect(CANDIDATE_DASHBOARD_PATH),
            Role::None | Role::Employer => GuardDecision::Redirect(DASHBOARD_PATH),
        };
    }
    if policy.requires_profile && !snapshot.has_profile {
        return GuardDecision::Redirect(CREATE_PROFILE_PATH);
    }
    GuardDecision::Allow
}

/// What the guarded subtree should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountRender {
    Nothing,
    Children,
}

/// Instructions for the rendering layer after one observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountOutcome {
    pub render: MountRender,
    /// Navigation to perform now. `None` when nothing new must happen.
    pub navigate: Option<&'static str>,
}

/// Per-subtree guard state: last observed version, current decision and the
/// redirect already issued for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardMount {
    policy: RoutePolicy,
    cursor: VersionCursor,
    decision: GuardDecision,
    issued: Option<&'static str>,
}

impl GuardMount {
    #[must_use]
    pub fn new(policy: RoutePolicy) -> Self {
        Self { policy, cursor: VersionCursor::default(), decision: GuardDecision::Pending, issued: None }
    }

    /// Re-evaluate for a newly published snapshot.
    ///
    /// Snapshots older than the newest one seen are ignored. A redirect to a
    /// target already issued is not issued again.
    pub fn observe(&mut self, version: SessionVersion, snapshot: &SessionSnapshot) -> MountOutcome {
        if !self.cursor.advance(version) {
            return MountOutcome { render: self.render(), navigate: None };
        }

        self.decision = evaluate(snapshot, self.policy);
        let navigate = match self.decision {
            GuardDecision::Redirect(target) if self.issued != Some(target) => {
                self.issued = Some(target);
                Some(target)
            }
            GuardDecision::Redirect(_) => None,
            GuardDecision::Pending | GuardDecision::Allow => {
                self.issued = None;
                None
            }
        };

        MountOutcome { render: self.render(), navigate }
    }

    #[must_use]
    pub fn decision(&self) -> GuardDecision {
        self.decision
    }

    /// Children render only on `Allow`; pending and redirecting both hide them.
    #[must_use]
    pub fn render(&self) -> MountRender {
        match self.decision {
            GuardDecision::Allow => MountRender::Children,
            GuardDecision::Pending | GuardDecision::Redirect(_) => MountRender::Nothing,
        }
    }
}
