use health_sentinel::cohort::labels::{label, Symptom};

#[test]
fn labeling_is_deterministic() {
    let symptoms = [Symptom::ChestPain, Symptom::Headache];
    let first = label(62, 31.5, 148, &symptoms);
    let second = label(62, 31.5, 148, &symptoms);
    assert_eq!(first, second);
}

#[test]
fn elderly_hypertensive_patient_scores_heart_and_hypertension() {
    // age>50 (+1) and bp>140 (+2) alone reach the heart threshold.
    let labels = label(70, 24.0, 155, &[]);
    assert!(labels.heart_disease);
    // bp>130 (+1), bp>140 (+2), age>60 (+1) well past threshold 2.
    assert!(labels.hypertension);
    assert!(!labels.diabetes);
}

#[test]
fn obese_middle_aged_patient_scores_diabetes_without_symptoms() {
    // age>45 (+1), bmi>25 (+1), bmi>30 (+1) = 3.
    let labels = label(48, 32.0, 120, &[]);
    assert!(labels.diabetes);
}

#[test]
fn lump_symptom_dominates_cancer_rule() {
    let labels = label(30, 21.0, 110, &[Symptom::LumpInBreast]);
    assert!(labels.cancer);
    // Cough alone (+2) stays below threshold 3.
    let labels = label(30, 21.0, 110, &[Symptom::PersistentCough]);
    assert!(!labels.cancer);
}

#[test]
fn rare_disease_has_no_partial_credit() {
    let labels = label(
        80,
        35.0,
        190,
        &[Symptom::MuscleWeakness, Symptom::JointPain],
    );
    assert!(!labels.rare_disease);
    let labels = label(
        25,
        20.0,
        105,
        &[Symptom::MuscleWeakness, Symptom::SkinRash],
    );
    assert!(labels.rare_disease);
}
