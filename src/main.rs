//! BreathHold - Adaptive breath-hold training planner
//!
//! Main entry point for the command-line tool.

use anyhow::Context as _;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use breathhold::cli::{self, Cli, Command, GenerateOutcome, Prompter};
use breathhold::storage::load_config;

fn main() -> ExitCode {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!("Starting BreathHold v{}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    let ctx = args.context(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    match args.selected_command() {
        Command::Generate => {
            let today = chrono::Local::now().date_naive();
            if let GenerateOutcome::Cancelled = cli::generate_plan(&ctx, &mut prompter, today)? {
                tracing::info!("Plan generation cancelled");
            }
        }
        Command::UpdateMax => {
            cli::update_max(&ctx, &mut prompter)?;
        }
    }

    Ok(())
}
