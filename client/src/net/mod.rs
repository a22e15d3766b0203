//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's JSON endpoints. Every call is browser-only; the
//! SSR build compiles stubs so shared components need no feature gates.

pub mod api;
