//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_resolver` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use redirect_resolver::initialization::init_logger_with;
use redirect_resolver::{resolve_urls, run_server, Command, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), trying the
    // current directory first, then the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match config.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => {
            if let Err(e) = run_server(config).await {
                eprintln!("redirect_resolver error: {:#}", e);
                process::exit(1);
            }
            Ok(())
        }
        Command::Resolve { urls } => match resolve_urls(&config, &urls).await {
            Ok(report) => {
                for (url, result) in &report.results {
                    match result {
                        Ok(resolved) => println!("{}\t{}\t{}", url, resolved.final_url, resolved.method),
                        Err(e) => eprintln!("{}\terror: {}", url, e),
                    }
                }
                if report.failed > 0 {
                    process::exit(1);
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("redirect_resolver error: {:#}", e);
                process::exit(1);
            }
        },
    }
}
