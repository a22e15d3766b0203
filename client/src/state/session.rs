//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` context by `App`. Every accepted
//! server answer is published into a `SessionFeed`, so readers (route guards,
//! the onboarding entry page) see a monotonically versioned snapshot.
//!
//! Refreshes can overlap: a fetch started before sign-out may resolve after
//! it. Each refresh takes a ticket when it starts and its answer is dropped
//! if a later ticket already landed.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gates::{SessionFeed, SessionIdentity, SessionPayload, SessionSnapshot, SessionVersion};
use leptos::prelude::*;

/// Identifies one session refresh in start order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    feed: SessionFeed,
    user: Option<SessionIdentity>,
    issued: RefreshTicket,
    landed: RefreshTicket,
}

impl SessionState {
    #[must_use]
    pub fn version(&self) -> SessionVersion {
        self.feed.version()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.feed.snapshot()
    }

    #[must_use]
    pub fn user(&self) -> Option<&SessionIdentity> {
        self.user.as_ref()
    }

    /// Reserve a ticket for a refresh about to start.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued = RefreshTicket(self.issued.0 + 1);
        self.issued
    }

    /// Publish the outcome of a refresh.
    ///
    /// A failed fetch publishes a signed-out snapshot. Returns `None` when a
    /// newer refresh already landed.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<SessionPayload, String>,
    ) -> Option<SessionVersion> {
        if ticket < self.landed {
            return None;
        }
        self.landed = ticket;
        Some(self.publish(result.unwrap_or_else(|_| SessionPayload::signed_out())))
    }

    /// Publish a payload the caller already holds (sign-in, role change).
    pub fn accept(&mut self, payload: SessionPayload) -> SessionVersion {
        let ticket = self.begin_refresh();
        self.landed = ticket;
        self.publish(payload)
    }

    /// Publish a signed-out snapshot, superseding any refresh in flight.
    pub fn sign_out(&mut self) -> SessionVersion {
        self.accept(SessionPayload::signed_out())
    }

    fn publish(&mut self, payload: SessionPayload) -> SessionVersion {
        let snapshot = payload.snapshot();
        self.user = payload.user.filter(|_| payload.authenticated);
        self.feed.publish(snapshot)
    }
}

/// Fetch the session and publish it, returning once the store is updated.
pub async fn reload_session(session: RwSignal<SessionState>) {
    let Some(ticket) = session.try_update(SessionState::begin_refresh) else {
        return;
    };
    let result = crate::net::api::fetch_session().await;
    #[cfg(feature = "hydrate")]
    if let Err(e) = &result {
        log::warn!("session refresh failed: {e}");
    }
    session.try_update(|s| s.complete_refresh(ticket, result));
}

/// Start a background session refresh. No-op during SSR.
pub fn refresh_session(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(reload_session(session));
    #[cfg(not(feature = "hydrate"))]
    let _ = session;
}
