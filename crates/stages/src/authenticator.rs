//! Authentication stage: credentials in, bearer token out.

use provisioning::{AuthToken, Credentials, ProvisioningError, TrackerApi};
use tracing::{debug, instrument, warn};

/// Exchanges the administrator credentials for a bearer token.
///
/// Exactly one call is made. Any failure is returned as
/// [`ProvisioningError::Auth`] wrapping the call error verbatim.
#[instrument(skip_all, fields(username = %credentials.username()))]
pub async fn authenticate<A>(
    api: &A,
    credentials: &Credentials,
) -> Result<AuthToken, ProvisioningError>
where
    A: TrackerApi + ?Sized,
{
    match api.authenticate(credentials).await {
        Ok(token) => {
            debug!("Authenticated");
            Ok(token)
        }
        Err(source) => {
            warn!(error = %source, "Authentication failed");
            Err(ProvisioningError::Auth { source })
        }
    }
}
