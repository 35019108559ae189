//! Alert rule and notification dispatch seam.

use serde::Serialize;
use tracing::{error, warn};

use crate::domain::{Disease, FusedRiskScore, Severity};
use crate::error::RiskError;

/// Payload handed to whichever channel does the actual delivery.
#[derive(Debug, Clone, Serialize)]
pub struct AlertPayload {
    pub patient_id: String,
    pub disease: Disease,
    pub severity: Severity,
    pub recommendations: Vec<String>,
}

/// Pure escalation decision: HIGH and CRITICAL tiers fire, nothing else.
pub fn evaluate(patient_id: &str, score: &FusedRiskScore) -> Option<AlertPayload> {
    if score.severity < Severity::High {
        return None;
    }
    Some(AlertPayload {
        patient_id: patient_id.to_string(),
        disease: score.disease,
        severity: score.severity,
        recommendations: score.recommendations.clone(),
    })
}

/// Delivery seam. Failures are logged by callers, never retried by the core.
pub trait Notifier {
    fn dispatch(&self, alert: &AlertPayload) -> Result<(), RiskError>;
}

/// Log-based dispatcher; real channels (SMS, email) plug in behind the
/// same trait.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn dispatch(&self, alert: &AlertPayload) -> Result<(), RiskError> {
        warn!(
            patient = %alert.patient_id,
            disease = %alert.disease,
            severity = %alert.severity,
            "risk alert"
        );
        Ok(())
    }
}

/// Evaluate and dispatch alerts for a batch of fused scores.
pub fn dispatch_alerts<'a, I>(notifier: &dyn Notifier, patient_id: &str, scores: I) -> usize
where
    I: IntoIterator<Item = &'a FusedRiskScore>,
{
    let mut fired = 0;
    for score in scores {
        if let Some(alert) = evaluate(patient_id, score) {
            match notifier.dispatch(&alert) {
                Ok(()) => fired += 1,
                Err(err) => error!(%err, disease = %alert.disease, "alert dispatch failed"),
            }
        }
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::recommend::recommendations_for;

    fn score(severity: Severity) -> FusedRiskScore {
        FusedRiskScore {
            disease: Disease::Dengue,
            probability: 0.9,
            severity,
            recommendations: recommendations_for(Disease::Dengue),
        }
    }

    #[test]
    fn only_high_and_critical_fire() {
        assert!(evaluate("p1", &score(Severity::Low)).is_none());
        assert!(evaluate("p1", &score(Severity::Moderate)).is_none());
        assert!(evaluate("p1", &score(Severity::High)).is_some());
        assert!(evaluate("p1", &score(Severity::Critical)).is_some());
    }

    #[test]
    fn payload_carries_recommendations() {
        let alert = evaluate("p1", &score(Severity::Critical)).unwrap();
        assert_eq!(alert.patient_id, "p1");
        assert!(!alert.recommendations.is_empty());
    }
}
