//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `profile_form`) so components depend
//! on small focused models. Decision logic lives in `gates`; these types only
//! hold what the browser needs to feed it.

pub mod profile_form;
pub mod session;
