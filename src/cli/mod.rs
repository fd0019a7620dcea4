//! Command-line interface.

pub mod commands;
pub mod prompt;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::storage::AppConfig;

pub use commands::{
    collect_profile, generate_plan, update_max, Context, GenerateOutcome, MaxUpdate,
};
pub use prompt::Prompter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "breathhold",
    version,
    about = "Adaptive breath-hold training planner",
    long_about = "Builds a weekly static apnea training plan from your current max hold and records progress between weeks."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Progress history file override
    #[arg(long, global = true)]
    pub progress_file: Option<PathBuf>,

    /// Directory for generated plans
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate this week's training plan (default)
    Generate,

    /// Record a new max hold after a performance test
    UpdateMax,
}

impl Cli {
    /// Subcommand to run; plain `breathhold` generates a plan.
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Generate)
    }

    /// Resolve the run context from config plus command-line overrides.
    pub fn context(&self, config: &AppConfig) -> Context {
        let mut ctx = Context::from_config(config);
        if let Some(path) = &self.progress_file {
            ctx.progress_file = path.clone();
        }
        if let Some(dir) = &self.output_dir {
            ctx.output_dir = dir.clone();
        }
        ctx
    }
}
