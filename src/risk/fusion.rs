//! Fusion of trend factors and environmental multipliers into bounded
//! probabilities.

use indexmap::IndexMap;
use tracing::debug;

use crate::context::trend::{trend_factor, TrendObservation};
use crate::domain::{Disease, FusedRiskScore, Severity};
use crate::risk::recommend;

/// Compounded multiplicative products get squeezed back into a probability.
const SCALE: f64 = 0.1;
/// Absolute certainty is never reported.
const CEILING: f64 = 0.95;

/// Combine trend and environmental factors over the union of both inputs.
/// A factor missing on either side contributes a neutral 1.0, never 0: a
/// disease with weather multipliers but no trend data still gets a score,
/// and vice versa.
pub fn fuse_context(
    trends: &[TrendObservation],
    multipliers: &IndexMap<Disease, f64>,
) -> IndexMap<Disease, FusedRiskScore> {
    let mut scores = IndexMap::with_capacity(trends.len() + multipliers.len());
    for trend in trends {
        let factor = trend_factor(trend.trend_percentage);
        let environmental = multipliers.get(&trend.disease).copied().unwrap_or(1.0);
        scores.insert(trend.disease, fused(trend.disease, factor, environmental));
    }
    for (&disease, &environmental) in multipliers {
        if !scores.contains_key(&disease) {
            scores.insert(disease, fused(disease, 1.0, environmental));
        }
    }
    scores
}

fn fused(disease: Disease, trend_factor: f64, environmental: f64) -> FusedRiskScore {
    let probability = (trend_factor * environmental * SCALE).clamp(0.0, CEILING);
    debug!(
        %disease,
        trend_factor,
        environmental,
        probability,
        "fused context score"
    );
    FusedRiskScore {
        disease,
        probability,
        severity: Severity::from_probability(probability),
        recommendations: recommend::recommendations_for(disease),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::trend::TrendDirection;

    fn trend(disease: Disease, pct: f64) -> TrendObservation {
        TrendObservation {
            disease,
            case_count: 100,
            trend_percentage: pct,
            direction: TrendDirection::Increasing,
        }
    }

    #[test]
    fn missing_multiplier_defaults_to_neutral() {
        let scores = fuse_context(&[trend(Disease::Covid, 20.0)], &IndexMap::new());
        let covid = &scores[&Disease::Covid];
        // 1.2 * 1.0 * 0.1
        assert!((covid.probability - 0.12).abs() < 1e-9);
    }

    #[test]
    fn large_products_hit_the_ceiling() {
        let mut multipliers = IndexMap::new();
        multipliers.insert(Disease::Dengue, 44.1);
        let scores = fuse_context(&[trend(Disease::Dengue, 30.0)], &multipliers);
        assert!((scores[&Disease::Dengue].probability - 0.95).abs() < 1e-9);
        assert_eq!(scores[&Disease::Dengue].severity, Severity::Critical);
    }

    #[test]
    fn disease_without_trend_data_still_scores() {
        let mut multipliers = IndexMap::new();
        multipliers.insert(Disease::Dengue, 2.5);
        let scores = fuse_context(&[], &multipliers);
        // 1.0 * 2.5 * 0.1
        assert!((scores[&Disease::Dengue].probability - 0.25).abs() < 1e-9);
    }

    #[test]
    fn collapsing_trend_never_goes_negative() {
        let scores = fuse_context(&[trend(Disease::Flu, -150.0)], &IndexMap::new());
        assert!(scores[&Disease::Flu].probability >= 0.0);
    }
}
