//! Typed error kinds for the scoring core.

use thiserror::Error;

use crate::domain::Disease;

#[derive(Debug, Error)]
pub enum RiskError {
    /// `predict` called while the ensemble holds no models. Callers wanting
    /// lazy-train convenience wrap this via `Ensemble::ensure_trained`.
    #[error("disease ensemble has not been trained")]
    UntrainedModel,

    /// A weather or trend source failed or timed out. Recovered internally
    /// by substituting defaults; never reaches a fused score.
    #[error("upstream {provider} unavailable: {reason}")]
    UpstreamUnavailable {
        provider: &'static str,
        reason: String,
    },

    /// Out-of-domain request input. Surfaced to the caller, never clamped.
    #[error("invalid vitals: {0}")]
    InvalidVitals(String),

    /// A disease key outside the closed enumerated set. Indicates a data
    /// model mismatch and aborts the assessment.
    #[error("unknown disease identifier `{0}`")]
    UnknownDisease(String),

    /// Classifier fit failure other than the documented single-class
    /// fallback. Fatal for the whole training pass.
    #[error("classifier fit failed for {disease}: {reason}")]
    ModelFit { disease: Disease, reason: String },

    #[error("cohort file error: {0}")]
    Cohort(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for RiskError {
    fn from(err: csv::Error) -> Self {
        RiskError::Cohort(err.to_string())
    }
}
