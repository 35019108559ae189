//! CLI entry-point for scoring one patient's vitals.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    api::types::RiskScoreDto,
    config::Settings,
    context::notify::{self, TracingNotifier},
    domain::PatientVitals,
    risk::{self, ensemble::Ensemble},
};

/// Args for the `assess` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[arg(long)]
    pub age: u32,
    #[arg(long)]
    pub bmi: f64,
    /// Systolic blood pressure in mmHg.
    #[arg(long)]
    pub bp: i32,
    /// Free-text symptom description.
    #[arg(long, default_value = "None")]
    pub symptoms: String,
    /// Identifier used in alert payloads.
    #[arg(long, default_value = "local-patient")]
    pub patient_id: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let vitals = PatientVitals {
        age: args.age,
        bmi: args.bmi,
        bp_systolic: args.bp,
        symptom_text: args.symptoms,
    };

    let ensemble = Ensemble::new();
    ensemble
        .ensure_trained(&settings)
        .context("training ensemble")?;
    let scores = risk::assess(&ensemble, &vitals).context("assessing vitals")?;

    let fired = notify::dispatch_alerts(&TracingNotifier, &args.patient_id, scores.values());
    info!(alerts = fired, "assessment complete");

    let report: Vec<RiskScoreDto> = scores.values().map(RiskScoreDto::from).collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
