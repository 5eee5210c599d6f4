//! vh-shell - video hosting session shell
//!
//! Every invocation restores the stored session, runs one command and prints
//! the result as JSON.
//!
//! # Examples
//!
//! ```bash
//! vh-shell login --email alice@example.com --password secret
//! vh-shell open /profile --pretty
//! vh-shell videos --trending 3
//! vh-shell logout
//! ```

use vh_shell::{App, Cli, Commands, ShellResult, logger};

use std::process::ExitCode;

use clap::Parser;
use log::info;
use serde_json::Value;
use vh_config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> ShellResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting vh-shell v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app = App::from_config(&config)?;
    app.execute(command).await
}
