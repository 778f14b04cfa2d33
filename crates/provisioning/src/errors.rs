//! Error types for the provisioning domain.
//!
//! [`TrackerError`] is what a [`crate::TrackerApi`] implementation reports for a
//! single failed call. [`ProvisioningError`] is what a stage reports for the
//! whole run; it always names which stage failed and wraps the triggering
//! [`TrackerError`] unchanged.
//!
//! There is no retry classification: every failure aborts the run.

use thiserror::Error;

use crate::{BoardName, EmailAddress};

// ---------------------------------------------------------------------------
// Port-level errors
// ---------------------------------------------------------------------------

/// A single call to the tracking service failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// The request never produced an HTTP response (DNS, TLS, connection reset,
    /// timeout).
    #[error("Transport error: {message}")]
    Transport {
        /// Description from the underlying HTTP client.
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("Tracking service rejected the request: {status} - {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body, verbatim.
        body: String,
    },

    /// The service answered with a success status but the body could not be
    /// understood.
    #[error("Invalid response from tracking service: {message}")]
    InvalidResponse {
        /// What was wrong with the body.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Stage-level errors
// ---------------------------------------------------------------------------

/// Errors that abort a provisioning run.
///
/// Only the first failure is ever reported; see the stage documentation for
/// how "first" is ordered when several concurrent calls fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProvisioningError {
    /// The authentication call failed or the credentials were rejected.
    #[error("Authentication failed: {source}")]
    Auth {
        /// Underlying call failure.
        #[source]
        source: TrackerError,
    },

    /// Creating a board failed.
    #[error("Failed to create board '{board}': {source}")]
    BoardCreation {
        /// The board whose creation failed.
        board: BoardName,
        /// Underlying call failure.
        #[source]
        source: TrackerError,
    },

    /// A created board has no role with the required name.
    #[error("Board '{board}' has no role named '{role}'")]
    RoleNotFound {
        /// The board lacking the role.
        board: BoardName,
        /// The role name that was looked up.
        role: String,
    },

    /// Granting a membership failed.
    #[error("Failed to add '{email}' to board '{board}': {source}")]
    MembershipCreation {
        /// The board the member was being added to.
        board: BoardName,
        /// The member whose grant failed.
        email: EmailAddress,
        /// Underlying call failure.
        #[source]
        source: TrackerError,
    },

    /// The created-board list does not line up with the requested-board list.
    ///
    /// Raised before any membership is dispatched.
    #[error("Created {created} boards for {requested} requests")]
    BoardCountMismatch {
        /// Number of boards requested.
        requested: usize,
        /// Number of boards reported as created.
        created: usize,
    },
}
