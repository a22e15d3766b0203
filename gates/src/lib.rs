//! Access-control and onboarding decisions shared by `server` and `client`.
//!
//! This crate owns the pure state machines of the application: the route
//! guard evaluator, the onboarding router for the profile entry point, and
//! the profile wizard. Nothing here renders or performs I/O; callers feed in
//! versioned session snapshots and user events and act on the returned
//! decisions.
//!
//! ARCHITECTURE
//! ============
//! - `session`: snapshot contract, canonical role resolution, versioning.
//! - `policy`: route groups and their fixed policies.
//! - `guard`: evaluator plus the stateful mount used by guarded subtrees.
//! - `onboarding`: classification for the `/profile` entry point.
//! - `wizard`: multi-step controller with a terminal submit.
//! - `profile`: profile draft model and per-step validation.

pub mod guard;
pub mod onboarding;
pub mod policy;
pub mod profile;
pub mod session;
pub mod wizard;

pub use guard::{GuardDecision, GuardMount, MountOutcome, MountRender, evaluate};
pub use onboarding::{OnboardingMount, OnboardingRoute, route};
pub use policy::{RequiredRole, RouteGroup, RoutePolicy};
pub use profile::{ProfileDraft, ProfileError, ProfileStep};
pub use session::{
    Role, RoleResolution, SessionFeed, SessionIdentity, SessionPayload, SessionSnapshot, SessionVersion, resolve_role,
};
pub use wizard::{SubmitOutcome, SubmitPhase, Wizard, WizardEffect, WizardError, WizardEvent, WizardView};
