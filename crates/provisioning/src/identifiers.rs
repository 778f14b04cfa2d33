//! Newtype domain identifiers.
//!
//! Every domain concept that has an identity is represented as a distinct newtype.
//! This prevents accidentally interchanging, for example, a [`ProjectId`] with a
//! [`RoleId`] even though both are opaque remote identifiers under the hood.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display, and
// serde that goes through new() so empty values are rejected on the way in.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = EmptyIdentifier;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value).ok_or(EmptyIdentifier)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Returned when an empty string is offered as a caller-supplied identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("identifier must not be empty")]
pub struct EmptyIdentifier;

// ---------------------------------------------------------------------------
// Macro for remote-assigned identifiers.
// Generates: struct (transparent over RemoteId), new(), Display.
// ---------------------------------------------------------------------------
macro_rules! remote_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(RemoteId);

        impl $name {
            /// Wraps an identifier assigned by the tracking service.
            pub fn new(value: impl Into<RemoteId>) -> Self {
                Self(value.into())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers: remote-assigned
// ---------------------------------------------------------------------------

/// An identifier chosen by the tracking service.
///
/// Taiga hands out integers, but the value is opaque to this system: whatever
/// shape arrives in a response is echoed back verbatim in later requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteId {
    /// Integer identifier (the common case).
    Number(u64),
    /// String identifier.
    Text(String),
}

impl From<u64> for RemoteId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RemoteId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RemoteId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl std::fmt::Display for RemoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

remote_id! {
    /// Identifies a board (a Taiga project) created during a run.
    ProjectId
}

remote_id! {
    /// Identifies a role scoped to one board.
    RoleId
}

// ---------------------------------------------------------------------------
// Identifiers: UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single provisioning run.
///
/// Generated fresh for every invocation; attached to the run's span so all
/// activity from a single run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifiers: String-backed (caller supplied)
// ---------------------------------------------------------------------------

string_id! {
    /// The name of a board as requested by the caller.
    ///
    /// Uniqueness is enforced by the tracking service, not here.
    BoardName
}

string_id! {
    /// The email address of a user to be granted membership on a board.
    EmailAddress
}

string_id! {
    /// The name of a role on a board (e.g. `"Back"`, `"Product Owner"`).
    RoleName
}
