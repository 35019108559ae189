//! Synthetic labeled cohort: sampling, CSV persistence, loading.
//!
//! Vitals are drawn from age-correlated normal distributions and left
//! unclamped; noisy outliers stay in, mirroring real intake data. Labels are
//! rule based and deterministic (see `labels`).

pub mod labels;

use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::RiskError;
use labels::{label, DiseaseLabels, Symptom};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// One synthetic patient with ground-truth labels. Immutable once generated.
#[derive(Debug, Clone)]
pub struct TrainingRecord {
    pub age: u32,
    pub gender: Gender,
    pub bmi: f64,
    pub bp_systolic: i32,
    pub symptoms: Vec<Symptom>,
    pub labels: DiseaseLabels,
}

/// Sample a cohort of `count` labeled records.
pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Vec<TrainingRecord> {
    (0..count).map(|_| sample_record(rng)).collect()
}

fn sample_record<R: Rng>(rng: &mut R) -> TrainingRecord {
    let age: u32 = rng.gen_range(20..=90);
    let gender = if rng.gen_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };

    // Older patients drift toward higher BP and BMI.
    let bp_mean = 110.0 + 0.5 * (age as f64 - 20.0);
    let bp_systolic = Normal::new(bp_mean, 15.0)
        .expect("valid normal parameters")
        .sample(rng)
        .round() as i32;

    let bmi_mean = 22.0 + 0.1 * (age as f64 - 20.0);
    let bmi = (Normal::new(bmi_mean, 4.0)
        .expect("valid normal parameters")
        .sample(rng)
        * 10.0)
        .round()
        / 10.0;

    let symptom_count = if age > 50 || bmi > 30.0 || bp_systolic > 140 {
        rng.gen_range(1..=4)
    } else {
        0
    };
    let symptoms: Vec<Symptom> = Symptom::VOCABULARY
        .choose_multiple(rng, symptom_count)
        .copied()
        .collect();

    let labels = label(age, bmi, bp_systolic, &symptoms);

    TrainingRecord {
        age,
        gender,
        bmi,
        bp_systolic,
        symptoms,
        labels,
    }
}

/// Flat CSV row matching the persisted cohort schema.
#[derive(Debug, Serialize, Deserialize)]
struct CohortRow {
    age: u32,
    gender: Gender,
    bmi: f64,
    bp_systolic: i32,
    symptoms: String,
    has_diabetes: u8,
    has_heart_disease: u8,
    has_hypertension: u8,
    has_cancer: u8,
    has_rare_disease: u8,
}

impl From<&TrainingRecord> for CohortRow {
    fn from(record: &TrainingRecord) -> Self {
        let symptoms = if record.symptoms.is_empty() {
            "None".to_string()
        } else {
            record
                .symptoms
                .iter()
                .map(Symptom::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        CohortRow {
            age: record.age,
            gender: record.gender,
            bmi: record.bmi,
            bp_systolic: record.bp_systolic,
            symptoms,
            has_diabetes: record.labels.diabetes as u8,
            has_heart_disease: record.labels.heart_disease as u8,
            has_hypertension: record.labels.hypertension as u8,
            has_cancer: record.labels.cancer as u8,
            has_rare_disease: record.labels.rare_disease as u8,
        }
    }
}

impl TryFrom<CohortRow> for TrainingRecord {
    type Error = RiskError;

    fn try_from(row: CohortRow) -> Result<Self, Self::Error> {
        let symptoms = if row.symptoms.trim().eq_ignore_ascii_case("none") {
            Vec::new()
        } else {
            row.symptoms
                .split(',')
                .filter(|tag| !tag.trim().is_empty())
                .map(str::parse)
                .collect::<Result<Vec<Symptom>, _>>()?
        };
        Ok(TrainingRecord {
            age: row.age,
            gender: row.gender,
            bmi: row.bmi,
            bp_systolic: row.bp_systolic,
            symptoms,
            labels: DiseaseLabels {
                diabetes: row.has_diabetes != 0,
                heart_disease: row.has_heart_disease != 0,
                hypertension: row.has_hypertension != 0,
                cancer: row.has_cancer != 0,
                rare_disease: row.has_rare_disease != 0,
            },
        })
    }
}

/// Write a cohort as CSV, creating parent directories as needed.
pub fn persist(path: &Path, records: &[TrainingRecord]) -> Result<(), RiskError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(CohortRow::from(record))?;
    }
    writer.flush()?;
    info!(path = %path.display(), count = records.len(), "wrote cohort csv");
    Ok(())
}

/// Load a persisted cohort.
pub fn load(path: &Path) -> Result<Vec<TrainingRecord>, RiskError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<CohortRow>() {
        records.push(TrainingRecord::try_from(row?)?);
    }
    info!(path = %path.display(), count = records.len(), "loaded cohort csv");
    Ok(records)
}
