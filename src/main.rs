// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use zonelock::{
    config::GridConfig,
    constants::{DEFAULT_CONFIG_FILE, EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE},
    controller::{apply_action, resolve_zones, summarize},
    report,
    wapi::WapiSession,
    zone::LockAction,
};

/// Manage NIOS zone locks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Override ini file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Operate on specific zone
    #[arg(short, long)]
    zone: Option<String>,

    /// Lock zone(s)
    #[arg(short, long, conflicts_with = "unlock")]
    lock: bool,

    /// Unlock zone(s)
    #[arg(short, long)]
    unlock: bool,

    /// Enable debug messages
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    /// Zone filter, treating an empty `--zone ""` as no filter.
    fn zone_filter(&self) -> Option<&str> {
        self.zone.as_deref().map(str::trim).filter(|z| !z.is_empty())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    let action = match LockAction::from_flags(args.lock, args.unlock) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    // Zones are processed strictly one after another, so a single-threaded runtime is enough
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match runtime.block_on(run(&args, action)) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            let message = format!("{e:#}");
            error!(error = %message, "Run aborted");
            eprintln!("Error: {message}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Initialize logging on stderr, leaving stdout for the zone report.
///
/// Respects `RUST_LOG` if set, otherwise logs at INFO (or DEBUG with `--debug`).
/// `RUST_LOG_FORMAT=json` switches to JSON output.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(debug)
                .with_line_number(debug)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(debug)
                .with_line_number(debug)
                .with_target(false)
                .compact()
                .init();
        }
    }

    debug!("Logging initialized");
}

async fn run(args: &Args, action: LockAction) -> Result<()> {
    let started = Instant::now();

    let config = GridConfig::from_file(&args.config).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            args.config.display()
        )
    })?;
    debug!(config = ?config, "Configuration loaded");

    let session = WapiSession::new(&config).context("Failed to create WAPI session")?;
    info!(base_url = %session.base_url(), action = ?action, "Connecting to grid master");

    let zones = resolve_zones(&session, args.zone_filter())
        .await
        .context("Failed to resolve zones")?;

    let results = apply_action(&session, &zones, action).await;
    for line in report::render(&results) {
        println!("{line}");
    }

    let summary = summarize(&results);
    if summary.has_failures() {
        warn!(
            failed = summary.failed,
            total = summary.total(),
            "Some zones could not be updated"
        );
    }

    info!(
        run_time = ?started.elapsed(),
        zones = summary.total(),
        changed = summary.changed,
        "Run complete"
    );

    Ok(())
}
