//! `kwal`: terminal front-end for the job board.

mod cli;
mod commands;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kwal_client::{ApiClient, ClientConfig};
use kwal_views::{AppContext, RecordingNavigator, StaticSession, ViewError};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Command failed");
            report(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url);
    }
    debug!(base_url = %config.base_url, "Client config");

    let client = ApiClient::new(config).context("Failed to create API client")?;

    let session = match cli.token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => {
            let session = StaticSession::signed_in(token);
            match &cli.email {
                Some(email) => session.with_email(email),
                None => session,
            }
        }
        None => StaticSession::signed_out(),
    };
    let navigator = Arc::new(RecordingNavigator::new());
    let ctx = AppContext::new(client, Arc::new(session), navigator.clone());

    commands::run(&ctx, &navigator, cli.command).await
}

fn report(e: &anyhow::Error) {
    eprintln!("Error: {:#}", e);
    if let Some(view_error) = e.downcast_ref::<ViewError>() {
        let errors = view_error.field_errors();
        if !errors.is_empty() {
            eprint!("{}", render::field_errors(&errors));
        }
    }
}

/// Colored output for development, JSON when `LOG_FORMAT=json`. Logs go to
/// stderr so command output stays clean.
fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env().add_directive("kwal=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter)
            .init();
    }
}
