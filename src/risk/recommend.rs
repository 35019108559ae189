//! Recommendation plans attached to fused scores.

use crate::domain::Disease;

/// Ordered action plan for a disease. Vitals-modeled diseases carry the
/// three-step plans; context diseases get a monitoring note.
pub fn recommendations_for(disease: Disease) -> Vec<String> {
    match disease {
        Disease::Diabetes => vec![
            "Schedule HbA1c test".to_string(),
            "Reduce sugar intake".to_string(),
            "Increase daily walking".to_string(),
        ],
        Disease::HeartDisease => vec![
            "Consult cardiologist immediately".to_string(),
            "Monitor BP daily".to_string(),
            "Low sodium diet".to_string(),
        ],
        Disease::Hypertension => vec![
            "Regular BP monitoring".to_string(),
            "Reduce stress".to_string(),
            "Limit alcohol and caffeine".to_string(),
        ],
        Disease::Cancer => vec![
            "Schedule screening immediately".to_string(),
            "Consult oncologist".to_string(),
            "Detailed family history review".to_string(),
        ],
        Disease::RareDisease => vec![
            "Genetic counseling".to_string(),
            "Specialist referral".to_string(),
            "Detailed symptom log".to_string(),
        ],
        other => vec![format!("Monitor for {} symptoms", other.display_name())],
    }
}
