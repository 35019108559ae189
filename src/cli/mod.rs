//! Command-line interface wiring for health-sentinel.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod assess;
pub mod generate;
pub mod outlook;
pub mod serve;
pub mod train;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Disease risk scoring and fusion engine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Generate(args) => generate::run(args, settings).await,
            Commands::Train => train::run(settings).await,
            Commands::Assess(args) => assess::run(args, settings).await,
            Commands::Outlook(args) => outlook::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a synthetic labeled cohort CSV.
    Generate(generate::Args),
    /// Train the per-disease classifier ensemble.
    Train,
    /// Score a patient's vitals and symptoms.
    Assess(assess::Args),
    /// Score regional disease risk from weather and case trends.
    Outlook(outlook::Args),
    /// Serve the JSON API.
    Serve(serve::Args),
}
