//! Command-line arguments and the board manifest.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use provisioning::{BoardRequest, SharedBoardOptions};
use serde::Deserialize;
use taiga::{TaigaConfig, DEFAULT_BASE_URL};
use thiserror::Error;

/// How log events are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

/// Create Taiga boards from a manifest and add their members.
#[derive(Parser)]
#[command(name = "taiga-boards", version, about)]
pub struct CliArgs {
    /// JSON manifest listing the shared options and the boards to create.
    #[arg(long, env = "TAIGA_MANIFEST")]
    pub manifest: PathBuf,

    /// Taiga administrator username.
    #[arg(long, env = "TAIGA_USERNAME")]
    pub username: String,

    /// Taiga administrator password.
    #[arg(long, env = "TAIGA_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Taiga API root.
    #[arg(long, env = "TAIGA_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds. No timeout when unset.
    #[arg(long, env = "TAIGA_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    /// OTLP gRPC endpoint for trace export. Tracing stays local when unset.
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,
}

impl CliArgs {
    /// Connection settings for the Taiga adapter.
    pub fn taiga_config(&self) -> TaigaConfig {
        TaigaConfig {
            base_url: self.api_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// A manifest was readable but describes an unusable run.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Manifest lists no boards")]
    NoBoards,

    #[error("Board #{index} has an empty name")]
    EmptyBoardName { index: usize },

    #[error("Board '{board}' has an empty member email at position {index}")]
    EmptyEmail { board: String, index: usize },
}

/// What to provision: one shared template and the boards it applies to.
///
/// ```json
/// {
///   "options": { "description": "Course project", "isPrivate": true, "kanbanEnabled": true },
///   "boards": [ { "name": "Team 1", "memberEmails": ["a@x.com"] } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub options: SharedBoardOptions,
    pub boards: Vec<BoardRequest>,
}

impl Manifest {
    /// Reads and validates a manifest file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid manifest {}", path.display()))
    }

    /// Parses and validates manifest JSON.
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(text)?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<(), ManifestError> {
        if self.boards.is_empty() {
            return Err(ManifestError::NoBoards);
        }
        for (index, board) in self.boards.iter().enumerate() {
            if board.name.as_str().trim().is_empty() {
                return Err(ManifestError::EmptyBoardName { index });
            }
            if let Some(index) = board
                .member_emails
                .iter()
                .position(|email| email.as_str().trim().is_empty())
            {
                return Err(ManifestError::EmptyEmail {
                    board: board.name.to_string(),
                    index,
                });
            }
        }
        Ok(())
    }
}
