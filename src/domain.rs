//! Core vocabulary shared by every scoring stage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RiskError;

/// Closed set of disease identifiers used across the whole pipeline.
///
/// The first five are modeled from vitals by the classifier ensemble; the
/// remaining four only appear on the environmental/trend path. Fusion must
/// treat a disease missing from one source as factor 1.0, never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Diabetes,
    HeartDisease,
    Hypertension,
    Cancer,
    RareDisease,
    Dengue,
    Malaria,
    Flu,
    Covid,
}

impl Disease {
    pub const ALL: [Disease; 9] = [
        Disease::Diabetes,
        Disease::HeartDisease,
        Disease::Hypertension,
        Disease::Cancer,
        Disease::RareDisease,
        Disease::Dengue,
        Disease::Malaria,
        Disease::Flu,
        Disease::Covid,
    ];

    /// Diseases with a per-disease classifier trained on {age, bmi, bp}.
    pub const VITALS_MODELED: [Disease; 5] = [
        Disease::Diabetes,
        Disease::HeartDisease,
        Disease::Hypertension,
        Disease::Cancer,
        Disease::RareDisease,
    ];

    /// Diseases scored from weather and regional case trends.
    pub const CONTEXTUAL: [Disease; 4] = [
        Disease::Dengue,
        Disease::Malaria,
        Disease::Flu,
        Disease::Covid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes",
            Disease::HeartDisease => "heart_disease",
            Disease::Hypertension => "hypertension",
            Disease::Cancer => "cancer",
            Disease::RareDisease => "rare_disease",
            Disease::Dengue => "dengue",
            Disease::Malaria => "malaria",
            Disease::Flu => "flu",
            Disease::Covid => "covid",
        }
    }

    /// Human-facing label used in reports and alerts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes",
            Disease::HeartDisease => "Heart Disease",
            Disease::Hypertension => "Hypertension",
            Disease::Cancer => "Cancer",
            Disease::RareDisease => "Rare Disease",
            Disease::Dengue => "Dengue",
            Disease::Malaria => "Malaria",
            Disease::Flu => "Flu",
            Disease::Covid => "Covid-19",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disease {
    type Err = RiskError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Disease::ALL
            .into_iter()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| RiskError::UnknownDisease(value.to_string()))
    }
}

/// Severity tiers over the canonical 0–1 probability scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Critical,
}

impl Severity {
    /// Discretize a probability. Cut points: 0.8 / 0.6 / 0.4.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.8 {
            Severity::Critical
        } else if probability >= 0.6 {
            Severity::High
        } else if probability >= 0.4 {
            Severity::Moderate
        } else {
            Severity::Low
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "LOW",
            Severity::Moderate => "MODERATE",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

/// Immutable input to a single ensemble-path assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientVitals {
    pub age: u32,
    pub bmi: f64,
    pub bp_systolic: i32,
    #[serde(default)]
    pub symptom_text: String,
}

impl PatientVitals {
    /// Reject out-of-domain numbers before any model sees them.
    ///
    /// Training data deliberately keeps unclamped noise; request inputs do
    /// not get the same leniency.
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.age > 120 {
            return Err(RiskError::InvalidVitals(format!(
                "age {} outside 0-120",
                self.age
            )));
        }
        if !self.bmi.is_finite() || self.bmi <= 0.0 {
            return Err(RiskError::InvalidVitals(format!(
                "bmi {} must be a positive number",
                self.bmi
            )));
        }
        if !(40..=300).contains(&self.bp_systolic) {
            return Err(RiskError::InvalidVitals(format!(
                "systolic bp {} outside 40-300",
                self.bp_systolic
            )));
        }
        Ok(())
    }
}

/// Terminal artifact of the core: one fused, tiered score per disease.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedRiskScore {
    pub disease: Disease,
    /// Final probability in [0, 1] on the canonical internal scale.
    pub probability: f64,
    pub severity: Severity,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disease_round_trips_through_str() {
        for disease in Disease::ALL {
            assert_eq!(disease.as_str().parse::<Disease>().unwrap(), disease);
        }
    }

    #[test]
    fn unknown_disease_is_rejected() {
        assert!(matches!(
            "ebola".parse::<Disease>(),
            Err(RiskError::UnknownDisease(_))
        ));
    }

    #[test]
    fn severity_cut_points() {
        assert_eq!(Severity::from_probability(0.85), Severity::Critical);
        assert_eq!(Severity::from_probability(0.8), Severity::Critical);
        assert_eq!(Severity::from_probability(0.6), Severity::High);
        assert_eq!(Severity::from_probability(0.45), Severity::Moderate);
        assert_eq!(Severity::from_probability(0.1), Severity::Low);
    }

    #[test]
    fn vitals_validation_flags_bad_input() {
        let vitals = PatientVitals {
            age: 130,
            bmi: 22.0,
            bp_systolic: 120,
            symptom_text: String::new(),
        };
        assert!(matches!(vitals.validate(), Err(RiskError::InvalidVitals(_))));
    }
}
