//! Taiga REST client implementing [`TrackerApi`].

use std::time::Duration;

use async_trait::async_trait;
use provisioning::{
    AuthToken, CreatedBoard, Credentials, MembershipRequest, NewBoard, TrackerApi, TrackerError,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::TaigaClientError;
use crate::wire::{AuthRequest, AuthResponse, ProjectPayload};

/// Public Taiga cloud API.
pub const DEFAULT_BASE_URL: &str = "https://api.taiga.io/api/v1";

/// Connection settings for a [`TaigaClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaigaConfig {
    /// API root, e.g. `https://api.taiga.io/api/v1`. A trailing slash is ignored.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for TaigaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Client for the Taiga REST API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct TaigaClient {
    http_client: Client,
    base_url: String,
}

impl TaigaClient {
    /// Creates a client for the given configuration.
    pub fn new(config: TaigaConfig) -> Result<Self, TaigaClientError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| TaigaClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TaigaClientError::InvalidBaseUrl {
                url: config.base_url,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
        })
    }

    /// Returns the API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B>(
        &self,
        path: &str,
        token: Option<&AuthToken>,
        body: &B,
    ) -> Result<String, TrackerError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = format!("{}/{path}", self.base_url);
        debug!(url = %url, "Sending request to Taiga");

        let mut request = self.http_client.post(&url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token.expose());
        }

        let response = request.send().await.map_err(|e| {
            debug!(error = %e, url = %url, "Taiga request could not be sent");
            TrackerError::Transport {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            debug!(status = %status, error = %e, "Failed to read Taiga response body");
            TrackerError::Transport {
                message: e.to_string(),
            }
        })?;
        // Bodies can carry the bearer token; only their size is logged.
        debug!(status = %status, bytes = text.len(), "Received response from Taiga");

        if !status.is_success() {
            return Err(TrackerError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, TrackerError> {
    serde_json::from_str(body).map_err(|e| {
        debug!(error = %e, "Failed to parse Taiga response");
        TrackerError::InvalidResponse {
            message: format!("JSON parse error: {e}"),
        }
    })
}

#[async_trait]
impl TrackerApi for TaigaClient {
    #[instrument(skip_all, fields(username = %credentials.username()))]
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, TrackerError> {
        let body = AuthRequest::normal(credentials.username(), credentials.password());
        let text = self.post("auth", None, &body).await?;
        let response: AuthResponse = parse(&text)?;
        Ok(AuthToken::new(response.auth_token))
    }

    #[instrument(skip_all, fields(board = %board.name))]
    async fn create_board(
        &self,
        token: &AuthToken,
        board: NewBoard<'_>,
    ) -> Result<CreatedBoard, TrackerError> {
        let body = ProjectPayload::from(board);
        let text = self.post("projects", Some(token), &body).await?;
        parse(&text)
    }

    #[instrument(skip_all, fields(project = %membership.project, email = %membership.email))]
    async fn create_membership(
        &self,
        token: &AuthToken,
        membership: &MembershipRequest,
    ) -> Result<(), TrackerError> {
        self.post("memberships", Some(token), membership).await?;
        Ok(())
    }
}
