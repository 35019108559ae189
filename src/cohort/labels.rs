//! Symptom vocabulary and the deterministic ground-truth label rules.
//!
//! The rules are weighted point tables per disease. They define the labels
//! the classifier ensemble learns from, so the constants here are load
//! bearing: change them and the trained models drift.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Disease;
use crate::error::RiskError;

/// Fixed 15-item symptom vocabulary, grouped by disease affinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    // diabetes
    FrequentUrination,
    ExcessiveThirst,
    UnexplainedWeightLoss,
    // heart
    ChestPain,
    ShortnessOfBreath,
    Palpitations,
    // hypertension
    Headache,
    BlurredVision,
    Dizziness,
    // cancer
    Fatigue,
    LumpInBreast,
    PersistentCough,
    // rare / general
    MuscleWeakness,
    JointPain,
    SkinRash,
}

impl Symptom {
    pub const VOCABULARY: [Symptom; 15] = [
        Symptom::FrequentUrination,
        Symptom::ExcessiveThirst,
        Symptom::UnexplainedWeightLoss,
        Symptom::ChestPain,
        Symptom::ShortnessOfBreath,
        Symptom::Palpitations,
        Symptom::Headache,
        Symptom::BlurredVision,
        Symptom::Dizziness,
        Symptom::Fatigue,
        Symptom::LumpInBreast,
        Symptom::PersistentCough,
        Symptom::MuscleWeakness,
        Symptom::JointPain,
        Symptom::SkinRash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symptom::FrequentUrination => "frequent_urination",
            Symptom::ExcessiveThirst => "excessive_thirst",
            Symptom::UnexplainedWeightLoss => "unexplained_weight_loss",
            Symptom::ChestPain => "chest_pain",
            Symptom::ShortnessOfBreath => "shortness_of_breath",
            Symptom::Palpitations => "palpitations",
            Symptom::Headache => "headache",
            Symptom::BlurredVision => "blurred_vision",
            Symptom::Dizziness => "dizziness",
            Symptom::Fatigue => "fatigue",
            Symptom::LumpInBreast => "lump_in_breast",
            Symptom::PersistentCough => "persistent_cough",
            Symptom::MuscleWeakness => "muscle_weakness",
            Symptom::JointPain => "joint_pain",
            Symptom::SkinRash => "skin_rash",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symptom {
    type Err = RiskError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Symptom::VOCABULARY
            .into_iter()
            .find(|s| s.as_str() == normalized)
            .ok_or_else(|| RiskError::Cohort(format!("unknown symptom tag `{value}`")))
    }
}

/// One boolean ground-truth label per vitals-modeled disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseLabels {
    pub diabetes: bool,
    pub heart_disease: bool,
    pub hypertension: bool,
    pub cancer: bool,
    pub rare_disease: bool,
}

impl DiseaseLabels {
    pub fn get(&self, disease: Disease) -> bool {
        match disease {
            Disease::Diabetes => self.diabetes,
            Disease::HeartDisease => self.heart_disease,
            Disease::Hypertension => self.hypertension,
            Disease::Cancer => self.cancer,
            Disease::RareDisease => self.rare_disease,
            _ => false,
        }
    }
}

/// Apply the rule-based point tables to one synthetic patient.
///
/// Deterministic given (age, bmi, bp, symptoms); the generator's only
/// randomness lives in the sampling, never in the labeling.
pub fn label(age: u32, bmi: f64, bp_systolic: i32, symptoms: &[Symptom]) -> DiseaseLabels {
    let has = |s: Symptom| symptoms.contains(&s);

    let mut diabetes_points = 0;
    if age > 45 {
        diabetes_points += 1;
    }
    if bmi > 25.0 {
        diabetes_points += 1;
    }
    if bmi > 30.0 {
        diabetes_points += 1;
    }
    if has(Symptom::FrequentUrination) {
        diabetes_points += 2;
    }
    if has(Symptom::ExcessiveThirst) {
        diabetes_points += 2;
    }

    let mut heart_points = 0;
    if age > 50 {
        heart_points += 1;
    }
    if bp_systolic > 140 {
        heart_points += 2;
    }
    if has(Symptom::ChestPain) {
        heart_points += 3;
    }
    if has(Symptom::ShortnessOfBreath) {
        heart_points += 1;
    }

    let mut hypertension_points = 0;
    if bp_systolic > 130 {
        hypertension_points += 1;
    }
    if bp_systolic > 140 {
        hypertension_points += 2;
    }
    if age > 60 {
        hypertension_points += 1;
    }
    if has(Symptom::Headache) {
        hypertension_points += 1;
    }

    let mut cancer_points = 0;
    if age > 60 {
        cancer_points += 1;
    }
    if has(Symptom::LumpInBreast) {
        cancer_points += 5;
    }
    if has(Symptom::PersistentCough) {
        cancer_points += 2;
    }
    if has(Symptom::UnexplainedWeightLoss) {
        cancer_points += 2;
    }

    // AND-only rule: both symptoms jointly, no partial credit.
    let mut rare_points = 0;
    if has(Symptom::MuscleWeakness) && has(Symptom::SkinRash) {
        rare_points += 3;
    }

    DiseaseLabels {
        diabetes: diabetes_points >= 3,
        heart_disease: heart_points >= 3,
        hypertension: hypertension_points >= 2,
        cancer: cancer_points >= 3,
        rare_disease: rare_points >= 3,
    }
}
