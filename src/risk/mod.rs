//! Risk scoring and fusion layer.
//!
//! Two scoring paths share one output shape and never mix inside a single
//! assessment: vitals + symptoms go through the classifier ensemble and the
//! keyword overlay; city context goes through weather multipliers and case
//! trends. Everything runs on the canonical 0–1 probability scale,
//! percentages only exist at presentation boundaries.

pub mod ensemble;
pub mod environment;
pub mod fusion;
pub mod overlay;
pub mod recommend;

use indexmap::IndexMap;
use tracing::info;

use crate::context::trend::TrendObservation;
use crate::context::weather::WeatherObservation;
use crate::domain::{Disease, FusedRiskScore, PatientVitals, Severity};
use crate::error::RiskError;
use ensemble::Ensemble;

/// Ensemble path: vitals + symptom text → one fused score per modeled
/// disease. Requires a trained ensemble; callers wanting lazy training use
/// `Ensemble::ensure_trained` first.
pub fn assess(
    ensemble: &Ensemble,
    vitals: &PatientVitals,
) -> Result<IndexMap<Disease, FusedRiskScore>, RiskError> {
    vitals.validate()?;

    let base = ensemble.predict(vitals)?;
    let boosted = overlay::apply(&base, &vitals.symptom_text);

    let mut scores = IndexMap::with_capacity(boosted.len());
    for (disease, probability) in boosted {
        let probability = probability.clamp(0.0, overlay::CEILING);
        scores.insert(
            disease,
            FusedRiskScore {
                disease,
                probability,
                severity: Severity::from_probability(probability),
                recommendations: recommend::recommendations_for(disease),
            },
        );
    }
    info!(age = vitals.age, diseases = scores.len(), "assessed vitals");
    Ok(scores)
}

/// Environmental path: one weather observation and one trend snapshot,
/// fetched once and reused across every disease in the assessment.
pub fn assess_with_context(
    weather: &WeatherObservation,
    trends: &[TrendObservation],
) -> IndexMap<Disease, FusedRiskScore> {
    let multipliers = environment::multipliers_for(weather);
    let scores = fusion::fuse_context(trends, &multipliers);
    info!(
        city = %weather.city,
        diseases = scores.len(),
        "assessed regional context"
    );
    scores
}
