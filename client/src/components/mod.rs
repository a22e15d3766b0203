//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components here are composed by pages. `route_guard` gates route groups,
//! the rest implement the sign-in and onboarding screens.

pub mod email_code_form;
pub mod profile_summary;
pub mod profile_wizard;
pub mod route_guard;
