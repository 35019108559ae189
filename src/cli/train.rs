//! CLI entry-point for training the classifier ensemble.

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::{cohort, config::Settings, domain::Disease, risk::ensemble::Ensemble};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let ensemble = Ensemble::new();
    ensemble
        .ensure_trained(&settings)
        .context("training ensemble")?;

    // Report label prevalence so drift in the generator is visible.
    let cohort = cohort::load(&settings.cohort_path()).context("loading cohort")?;
    for disease in Disease::VITALS_MODELED {
        let positives = cohort.iter().filter(|r| r.labels.get(disease)).count();
        info!(
            %disease,
            prevalence = positives as f64 / cohort.len() as f64,
            "label prevalence"
        );
    }
    Ok(())
}
