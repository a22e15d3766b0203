//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are mounted by `app::App`. Guarded pages are wrapped in
//! `RouteGuard` at the route definition, so the pages themselves assume the
//! session already satisfies their group's policy.

pub mod about;
pub mod candidate;
pub mod dashboard;
pub mod employer;
pub mod home;
pub mod profile;
pub mod sign_in;
pub mod sign_up;
