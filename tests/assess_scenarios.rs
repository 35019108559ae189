//! End-to-end scenarios for the ensemble assessment path.

use health_sentinel::cohort;
use health_sentinel::domain::{Disease, PatientVitals};
use health_sentinel::error::RiskError;
use health_sentinel::risk::{self, ensemble::Ensemble};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn trained_ensemble(seed: u64) -> Ensemble {
    let mut rng = StdRng::seed_from_u64(seed);
    let records = cohort::generate(&mut rng, 2000);
    let ensemble = Ensemble::new();
    ensemble.train(&records).expect("training succeeds");
    ensemble
}

fn vitals(age: u32, bmi: f64, bp: i32, symptoms: &str) -> PatientVitals {
    PatientVitals {
        age,
        bmi,
        bp_systolic: bp,
        symptom_text: symptoms.to_string(),
    }
}

#[test]
fn chest_pain_pushes_heart_disease_past_half() {
    let ensemble = trained_ensemble(17);
    let scores = risk::assess(&ensemble, &vitals(60, 30.0, 160, "chest pain")).unwrap();
    assert!(scores[&Disease::HeartDisease].probability > 0.5);
}

#[test]
fn healthy_young_adult_has_low_diabetes_risk() {
    let ensemble = trained_ensemble(17);
    let scores = risk::assess(&ensemble, &vitals(25, 22.0, 110, "None")).unwrap();
    assert!(scores[&Disease::Diabetes].probability < 0.5);
}

#[test]
fn every_score_stays_below_the_overlay_ceiling() {
    let ensemble = trained_ensemble(23);
    let scores = risk::assess(
        &ensemble,
        &vitals(85, 38.0, 190, "thirst, chest pain, headache, blurred vision, lump"),
    )
    .unwrap();
    for (_, score) in scores {
        assert!((0.0..=0.999).contains(&score.probability));
    }
}

#[test]
fn invalid_vitals_are_surfaced_not_clamped() {
    let ensemble = trained_ensemble(17);
    let result = risk::assess(&ensemble, &vitals(200, 22.0, 110, "None"));
    assert!(matches!(result, Err(RiskError::InvalidVitals(_))));
}

#[test]
fn assessment_covers_all_vitals_modeled_diseases() {
    let ensemble = trained_ensemble(17);
    let scores = risk::assess(&ensemble, &vitals(40, 26.0, 125, "")).unwrap();
    for disease in Disease::VITALS_MODELED {
        assert!(scores.contains_key(&disease), "missing {disease}");
    }
}
