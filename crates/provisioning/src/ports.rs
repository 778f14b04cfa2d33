//! Port trait through which the stages reach the tracking service.
//!
//! Infrastructure crates implement [`TrackerApi`]; the stages never see HTTP.
//! Each method is exactly one remote call. Implementations must not retry.

use async_trait::async_trait;

use crate::{AuthToken, CreatedBoard, Credentials, MembershipRequest, NewBoard, TrackerError};

/// The three remote operations a provisioning run needs.
#[async_trait]
pub trait TrackerApi: Send + Sync {
    /// Exchanges administrator credentials for a bearer token.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, TrackerError>;

    /// Creates one board and returns its identifier and roles.
    async fn create_board(
        &self,
        token: &AuthToken,
        board: NewBoard<'_>,
    ) -> Result<CreatedBoard, TrackerError>;

    /// Grants one membership.
    async fn create_membership(
        &self,
        token: &AuthToken,
        membership: &MembershipRequest,
    ) -> Result<(), TrackerError>;
}
