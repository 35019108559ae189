//! Regional case-trend source and trend-to-base-risk conversion.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::Disease;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Stable,
    Decreasing,
}

/// Recent case activity for one disease in one region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendObservation {
    pub disease: Disease,
    pub case_count: u32,
    /// Signed percentage change over the recent window.
    pub trend_percentage: f64,
    pub direction: TrendDirection,
}

/// A rising trend amplifies base risk, a falling one dampens it.
pub fn trend_factor(trend_percentage: f64) -> f64 {
    1.0 + trend_percentage / 100.0
}

/// Surveillance-feed stand-in until a real regional source is wired up.
/// Case counts and trend ranges follow typical reporting volumes per
/// disease.
pub fn sample_trends<R: Rng>(rng: &mut R, _city: &str) -> Vec<TrendObservation> {
    vec![
        TrendObservation {
            disease: Disease::Dengue,
            case_count: rng.gen_range(100..=500),
            trend_percentage: rng.gen_range(-10..=30) as f64,
            direction: TrendDirection::Increasing,
        },
        TrendObservation {
            disease: Disease::Flu,
            case_count: rng.gen_range(50..=200),
            trend_percentage: rng.gen_range(-5..=20) as f64,
            direction: TrendDirection::Stable,
        },
        TrendObservation {
            disease: Disease::Covid,
            case_count: rng.gen_range(200..=800),
            trend_percentage: rng.gen_range(-15..=10) as f64,
            direction: TrendDirection::Decreasing,
        },
        TrendObservation {
            disease: Disease::Malaria,
            case_count: rng.gen_range(30..=150),
            trend_percentage: rng.gen_range(-5..=25) as f64,
            direction: TrendDirection::Increasing,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn factor_converts_percentage_linearly() {
        assert!((trend_factor(25.0) - 1.25).abs() < 1e-9);
        assert!((trend_factor(0.0) - 1.0).abs() < 1e-9);
        assert!((trend_factor(-10.0) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn sampled_trends_cover_contextual_diseases() {
        let mut rng = StdRng::seed_from_u64(3);
        let trends = sample_trends(&mut rng, "dhaka");
        let diseases: Vec<Disease> = trends.iter().map(|t| t.disease).collect();
        for disease in Disease::CONTEXTUAL {
            assert!(diseases.contains(&disease));
        }
    }
}
