//! Core domain for Taiga board provisioning.
//!
//! This crate contains every domain concept, newtype identifier, shared value
//! type, and error type used by the provisioning stages, plus the
//! [`TrackerApi`] port they call. Infrastructure crates implement the port;
//! they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Domain + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`ProjectId`, `RoleId`, `BoardName`, etc.) |
//! | [`types`] | Requests, created boards, secrets, run summary |
//! | [`errors`] | Call-level and run-level error types |
//! | [`ports`] | The [`TrackerApi`] trait |

pub mod errors;
pub mod identifiers;
pub mod ports;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{ProvisioningError, TrackerError};
pub use identifiers::{
    BoardName, EmailAddress, EmptyIdentifier, ProjectId, RemoteId, RoleId, RoleName, RunId,
};
pub use ports::TrackerApi;
pub use types::{
    AuthToken, BoardRequest, CreatedBoard, Credentials, MembershipRequest, NewBoard,
    ProvisioningSummary, Role, SharedBoardOptions, Timestamp, MEMBER_ROLE_NAME,
};
