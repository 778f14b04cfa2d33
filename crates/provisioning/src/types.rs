//! Shared value types for the provisioning domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! the data that flows between stages: what the caller asked for, what the
//! tracking service created, and what a finished run reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{BoardName, EmailAddress, ProjectId, RoleId, RoleName, RunId};

/// Name of the role granted to every member on every board.
pub const MEMBER_ROLE_NAME: &str = "Back";

// ---------------------------------------------------------------------------
// Secrets
// ---------------------------------------------------------------------------

/// Administrator credentials supplied by the caller.
///
/// Consumed once by authentication and never persisted. `Debug` output never
/// contains the password.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates a new credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the administrator username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the administrator password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// ---------------------------------------------------------------------------

/// Bearer token returned by authentication.
///
/// Lives for exactly one run and is only ever read after it is produced.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for use in an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Configuration template applied identically to every board in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SharedBoardOptions {
    /// Description given to every board.
    pub description: String,
    /// Whether boards are private.
    pub is_private: bool,
    /// Whether the backlog module is enabled.
    pub backlog_enabled: bool,
    /// Whether the issues module is enabled.
    pub issues_enabled: bool,
    /// Whether the kanban module is enabled.
    pub kanban_enabled: bool,
    /// Whether the wiki module is enabled.
    pub wiki_enabled: bool,
}

/// One desired board and the members to be granted access to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRequest {
    /// Board name; must be unique within the tracking service.
    pub name: BoardName,
    /// Members to add, in the order their memberships are dispatched.
    #[serde(default)]
    pub member_emails: Vec<EmailAddress>,
}

impl BoardRequest {
    /// Creates a board request.
    pub fn new(name: BoardName, member_emails: Vec<EmailAddress>) -> Self {
        Self {
            name,
            member_emails,
        }
    }
}

/// Everything the tracking service needs to create one board: the shared
/// template plus that board's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewBoard<'a> {
    /// The requested board name.
    pub name: &'a BoardName,
    /// The shared template.
    pub options: &'a SharedBoardOptions,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A role available on a created board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role identifier, scoped to its board.
    pub id: RoleId,
    /// Human-readable role name.
    pub name: RoleName,
}

/// A board as returned by the tracking service after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBoard {
    /// Identifier assigned by the tracking service.
    pub id: ProjectId,
    /// Roles available on this board.
    pub roles: Vec<Role>,
}

impl CreatedBoard {
    /// Returns the identifier of the role whose name is exactly `name`.
    ///
    /// Matching is case-sensitive.
    pub fn role_id(&self, name: &str) -> Option<&RoleId> {
        self.roles
            .iter()
            .find(|role| role.name.as_str() == name)
            .map(|role| &role.id)
    }
}

/// A single membership grant: one member, one role, one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRequest {
    /// The board the member joins.
    pub project: ProjectId,
    /// The role the member receives.
    pub role: RoleId,
    /// The member's email address.
    pub email: EmailAddress,
}

// ---------------------------------------------------------------------------
// Run reporting
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// Outcome of a fully successful run.
///
/// Failed runs report only their first error; there is no partial summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvisioningSummary {
    /// Identifier of the run.
    pub run_id: RunId,
    /// When authentication was started.
    pub started_at: Timestamp,
    /// When the last membership settled.
    pub finished_at: Timestamp,
    /// Created boards, aligned with the requested boards.
    pub boards: Vec<CreatedBoard>,
    /// Granted memberships, in dispatch order.
    pub memberships: Vec<MembershipRequest>,
}
