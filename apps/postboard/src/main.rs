//! # Postboard
//!
//! Command-line front end for the post store.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod config;
mod error;
mod handlers;
mod state;
mod telemetry;

use cli::{Cli, OutputFormat};
use config::AppConfig;
use handlers::Console;
use state::AppState;

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env().with_cli(&cli);

    telemetry::init_telemetry(&config.telemetry);

    let mut state = AppState::new(&config);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let stdin = io::stdin();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let mut input = stdin.lock();
    let mut console = Console {
        out: &mut out,
        err: &mut err,
        input: &mut input,
    };

    let result = handlers::dispatch(cli.command, &mut state.store, cli.format, &mut console);

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!(error = %e, "Command failed");
            match cli.format {
                OutputFormat::Json => {
                    let body = serde_json::to_string_pretty(&e.to_response())?;
                    writeln!(out, "{body}")?;
                }
                OutputFormat::Text | OutputFormat::Html => {
                    for line in e.alert_lines() {
                        writeln!(err, "{line}")?;
                    }
                }
            }
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
