//! CLI entry-point for generating the synthetic training cohort.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use rand::thread_rng;
use tracing::{info, instrument};

use crate::{cohort, config::Settings};

/// Args for the `generate` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Number of patients to generate; defaults to the configured size.
    #[arg(long)]
    pub count: Option<usize>,
    /// Output path; defaults to the configured cohort location.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let count = args.count.unwrap_or(settings.cohort_size);
    let path = args.out.unwrap_or_else(|| settings.cohort_path());

    let mut rng = thread_rng();
    let records = cohort::generate(&mut rng, count);
    cohort::persist(&path, &records).context("writing cohort csv")?;

    let positives = records.iter().filter(|r| r.labels.diabetes).count();
    info!(
        count,
        diabetes_prevalence = positives as f64 / count as f64,
        "cohort generated"
    );
    Ok(())
}
