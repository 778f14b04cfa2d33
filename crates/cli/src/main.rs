//! `taiga-boards` entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration**: command-line flags (or their environment
//!    variables) and the JSON board manifest.
//! 2. **Wire observability**: `tracing-subscriber` with a JSON or pretty layer
//!    on stderr and, when an endpoint is configured, an OpenTelemetry OTLP
//!    exporter.
//! 3. **Construct infrastructure**: a [`taiga::TaigaClient`] injected into a
//!    [`stages::Orchestrator`].
//! 4. **Run once**: provision every board in the manifest and print the run
//!    summary as JSON on stdout.

mod config;
mod telemetry;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use provisioning::Credentials;
use stages::Orchestrator;
use taiga::TaigaClient;
use tracing::error;

use crate::config::{CliArgs, Manifest};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let telemetry = match telemetry::init(args.log_format, args.otlp_endpoint.as_deref()) {
        Ok(telemetry) => telemetry,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = run(args).await;
    if let Err(err) = &outcome {
        error!(error = %format!("{err:#}"), "taiga-boards failed");
    }
    telemetry.shutdown();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let manifest = Manifest::load(&args.manifest)?;
    let client =
        TaigaClient::new(args.taiga_config()).context("failed to configure Taiga client")?;
    let credentials = Credentials::new(args.username, args.password);

    let summary = Orchestrator::new(client)
        .provision(credentials, &manifest.boards, &manifest.options)
        .await
        .context("provisioning failed")?;

    let rendered =
        serde_json::to_string_pretty(&summary).context("failed to render run summary")?;
    println!("{rendered}");
    Ok(())
}
