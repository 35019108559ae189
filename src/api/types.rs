//! Shared DTOs for JSON requests and responses.
//!
//! Probabilities cross this boundary as percentages rounded to one decimal;
//! the core itself never leaves the 0–1 scale.

use serde::{Deserialize, Serialize};

use crate::domain::{FusedRiskScore, PatientVitals, Severity};

#[derive(Debug, Clone, Deserialize)]
pub struct AssessRequest {
    pub age: u32,
    pub bmi: f64,
    pub bp_systolic: i32,
    #[serde(default)]
    pub symptoms: String,
}

impl From<AssessRequest> for PatientVitals {
    fn from(request: AssessRequest) -> Self {
        PatientVitals {
            age: request.age,
            bmi: request.bmi,
            bp_systolic: request.bp_systolic,
            symptom_text: request.symptoms,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskScoreDto {
    pub disease: String,
    pub disease_name: String,
    pub risk_percent: f64,
    pub severity: Severity,
    pub recommendations: Vec<String>,
}

impl From<&FusedRiskScore> for RiskScoreDto {
    fn from(score: &FusedRiskScore) -> Self {
        RiskScoreDto {
            disease: score.disease.as_str().to_string(),
            disease_name: score.disease.display_name().to_string(),
            risk_percent: (score.probability * 1000.0).round() / 10.0,
            severity: score.severity,
            recommendations: score.recommendations.clone(),
        }
    }
}
