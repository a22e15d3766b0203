//! Session snapshot contract and canonical role resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity source (server session endpoint, client session store) is the
//! only writer of session state. It publishes immutable snapshots tagged with
//! a monotonically increasing [`SessionVersion`]; guards and the onboarding
//! router only read them.
//!
//! Role metadata has historically been written under two keys (`role` and the
//! legacy `user_type`). [`resolve_role`] is the single place that reads them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical metadata key for the account role.
pub const ROLE_KEY: &str = "role";
/// Legacy metadata key still present on older accounts.
pub const LEGACY_ROLE_KEY: &str = "user_type";

/// Account role carried by an authenticated user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// No role chosen yet (or metadata could not be resolved).
    #[default]
    None,
    Candidate,
    Employer,
}

impl Role {
    /// Parse a metadata value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "candidate" => Some(Self::Candidate),
            "employer" => Some(Self::Employer),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Candidate => "candidate",
            Self::Employer => "employer",
        }
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which metadata key a resolved role came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleSource {
    Role,
    UserType,
}

/// Outcome of reading the role out of user metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleResolution {
    /// Neither key carries a recognized role.
    Unset,
    /// Exactly one role was found, or both keys agree.
    Resolved { role: Role, source: RoleSource },
    /// Both keys carry recognized but different roles.
    Conflict { role: Role, user_type: Role },
}

impl RoleResolution {
    /// Role the guards should act on. Conflicts resolve to [`Role::None`].
    #[must_use]
    pub fn role(self) -> Role {
        match self {
            Self::Resolved { role, .. } => role,
            Self::Unset | Self::Conflict { .. } => Role::None,
        }
    }
}

fn metadata_role(metadata: &Value, key: &str) -> Option<Role> {
    metadata.get(key).and_then(Value::as_str).and_then(Role::parse)
}

/// Resolve the account role from user metadata.
///
/// `role` wins when present. `user_type` is only consulted as a fallback, and
/// a disagreement between the two is reported instead of picked.
#[must_use]
pub fn resolve_role(metadata: &Value) -> RoleResolution {
    match (metadata_role(metadata, ROLE_KEY), metadata_role(metadata, LEGACY_ROLE_KEY)) {
        (Some(role), Some(user_type)) if role != user_type => RoleResolution::Conflict { role, user_type },
        (Some(role), _) => RoleResolution::Resolved { role, source: RoleSource::Role },
        (None, Some(role)) => RoleResolution::Resolved { role, source: RoleSource::UserType },
        (None, None) => RoleResolution::Unset,
    }
}

/// Point-in-time read of authentication, role and profile state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// True until the identity source has resolved. Other fields are not
    /// trustworthy while this is set.
    pub loading: bool,
    pub is_authenticated: bool,
    pub role: Role,
    pub has_profile: bool,
}

impl SessionSnapshot {
    /// Snapshot published before the identity source has answered.
    #[must_use]
    pub const fn loading() -> Self {
        Self { loading: true, is_authenticated: false, role: Role::None, has_profile: false }
    }

    #[must_use]
    pub const fn signed_out() -> Self {
        Self { loading: false, is_authenticated: false, role: Role::None, has_profile: false }
    }

    #[must_use]
    pub const fn signed_in(role: Role, has_profile: bool) -> Self {
        Self { loading: false, is_authenticated: true, role, has_profile }
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

/// Identity fields returned alongside a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
}

/// Wire shape of `GET /api/auth/session`.
///
/// The server resolves the role once; clients never read raw metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<SessionIdentity>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub has_profile: bool,
}

impl SessionPayload {
    #[must_use]
    pub fn signed_out() -> Self {
        Self { authenticated: false, user: None, role: Role::None, has_profile: false }
    }

    /// Resolved snapshot for this payload (never loading).
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        if self.authenticated {
            SessionSnapshot::signed_in(self.role, self.has_profile)
        } else {
            SessionSnapshot::signed_out()
        }
    }
}

/// Monotonic version attached to every published snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionVersion(pub u64);

impl SessionVersion {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Publisher side of the session source: owns the current version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionFeed {
    version: SessionVersion,
    snapshot: SessionSnapshot,
}

impl SessionFeed {
    /// A feed at version zero holding a loading snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current snapshot and return the version it was published at.
    pub fn publish(&mut self, snapshot: SessionSnapshot) -> SessionVersion {
        self.version = self.version.next();
        self.snapshot = snapshot;
        self.version
    }

    #[must_use]
    pub fn version(&self) -> SessionVersion {
        self.version
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot
    }
}

/// Tracks the newest version a reader has observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VersionCursor(Option<SessionVersion>);

impl VersionCursor {
    /// Record `version` unless it is older than one already seen.
    ///
    /// Returns `false` for stale versions; equal versions are accepted so a
    /// re-evaluation of the current snapshot is not mistaken for staleness.
    pub fn advance(&mut self, version: SessionVersion) -> bool {
        if self.0.is_some_and(|seen| version < seen) {
            return false;
        }
        self.0 = Some(version);
        true
    }
}
