//! # Padaria
//!
//! Command-line entry point: loads the configuration, starts the catalog stores, seeds and
//! demonstrates the catalog, prints the menu and shuts down.
//!
//! Exits with status 1 when the configuration or the log file cannot be opened, or when a
//! store task fails.

use clap::Parser;
use padaria::config::PadariaConfig;
use padaria::lifecycle::{console, open_event_log, setup_tracing, PadariaSystem, SystemError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "padaria", version, about = "Bakery catalog demo")]
struct Cli {
    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also append event-log records to this file (overrides the config)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Do not print the menu
    #[arg(long)]
    no_menu: bool,

    /// Print the event log before exiting
    #[arg(long)]
    show_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Fatal error");
            eprintln!("❌ Erro fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), SystemError> {
    let mut config = match &cli.config {
        Some(path) => PadariaConfig::load(path)?,
        None => PadariaConfig::default(),
    };
    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    }

    let (logger, records) = open_event_log(config.log_file.as_deref()).await?;
    info!(channel_capacity = config.channel_capacity, "Starting catalog");

    let system = PadariaSystem::new(config, logger);
    system.init().await;

    if !cli.no_menu {
        system.show_menu();
    }
    if cli.show_logs {
        console::print_log_records(&records.records());
    }
    console::print_farewell();

    system.shutdown().await
}
