//! Per-disease probability ensemble over {age, bmi, systolic bp}.
//!
//! One binary logistic classifier per vitals-modeled disease, trained
//! against the generated ground-truth labels. Trained state is explicit
//! (`Untrained | Trained`) and replaced wholesale: a retrain builds the
//! complete model set off to the side and publishes it in one swap, so
//! concurrent readers see either the old set or the new one, never a mix.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use linfa::dataset::DatasetBase;
use linfa::prelude::Fit;
use linfa_logistic::{FittedLogisticRegression, LogisticRegression};
use ndarray::{Array1, Array2};
use rand::thread_rng;
use tracing::{info, warn};

use crate::cohort::{self, TrainingRecord};
use crate::config::Settings;
use crate::domain::{Disease, PatientVitals};
use crate::error::RiskError;

const FEATURES: usize = 3;
const MAX_ITERATIONS: u64 = 500;

/// Column-wise standardisation fitted on the training cohort.
#[derive(Debug, Clone)]
struct Scaler {
    mean: [f64; FEATURES],
    sd: [f64; FEATURES],
}

impl Scaler {
    fn fit(x: &Array2<f64>) -> Self {
        let rows = x.nrows() as f64;
        let mut mean = [0.0; FEATURES];
        let mut sd = [1.0; FEATURES];
        for col in 0..FEATURES {
            let column = x.column(col);
            let m = column.sum() / rows;
            let var = column.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / rows;
            mean[col] = m;
            if var.sqrt() > 1e-9 {
                sd[col] = var.sqrt();
            }
        }
        Scaler { mean, sd }
    }

    fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        let mut out = x.clone();
        for col in 0..FEATURES {
            let mut column = out.column_mut(col);
            column.mapv_inplace(|v| (v - self.mean[col]) / self.sd[col]);
        }
        out
    }
}

/// Model for a single disease.
enum DiseaseModel {
    /// Every training label agreed; predict the class frequency outright.
    Constant(f64),
    Logistic {
        scaler: Scaler,
        model: FittedLogisticRegression<f64, i32>,
    },
}

impl DiseaseModel {
    fn probability(&self, features: &Array2<f64>) -> f64 {
        match self {
            DiseaseModel::Constant(p) => *p,
            DiseaseModel::Logistic { scaler, model } => {
                let scaled = scaler.transform(features);
                // predict_probabilities is oriented toward whichever class
                // the fit picked as positive (the more frequent one), so
                // flip when that class is the healthy 0.
                let p = model.predict_probabilities(&scaled)[0];
                if model.labels().pos.class == 1 {
                    p
                } else {
                    1.0 - p
                }
            }
        }
    }
}

/// Complete set of fitted models, one slot per vitals-modeled disease.
pub struct ModelSet {
    models: [DiseaseModel; Disease::VITALS_MODELED.len()],
}

impl ModelSet {
    fn fit(cohort: &[TrainingRecord]) -> Result<Self, RiskError> {
        if cohort.is_empty() {
            return Err(RiskError::Cohort("cannot train on an empty cohort".into()));
        }

        let x = feature_matrix(cohort);
        let scaler = Scaler::fit(&x);
        let scaled = scaler.transform(&x);

        let mut fitted = Vec::with_capacity(Disease::VITALS_MODELED.len());
        for disease in Disease::VITALS_MODELED {
            let labels: Vec<i32> = cohort
                .iter()
                .map(|r| r.labels.get(disease) as i32)
                .collect();
            let positives = labels.iter().filter(|&&l| l == 1).count();

            if positives == 0 || positives == labels.len() {
                // Single-class cohort slice; logistic regression has nothing
                // to separate. Fall back to the class frequency.
                let p = positives as f64 / labels.len() as f64;
                warn!(%disease, frequency = p, "single-class labels, using constant model");
                fitted.push(DiseaseModel::Constant(p));
                continue;
            }

            let y = Array1::from(labels);
            let dataset: DatasetBase<_, _> = DatasetBase::new(scaled.clone(), y);
            let model = LogisticRegression::default()
                .max_iterations(MAX_ITERATIONS)
                .fit(&dataset)
                .map_err(|e| RiskError::ModelFit {
                    disease,
                    reason: e.to_string(),
                })?;
            fitted.push(DiseaseModel::Logistic {
                scaler: scaler.clone(),
                model,
            });
        }

        let models: [DiseaseModel; Disease::VITALS_MODELED.len()] = fitted
            .try_into()
            .map_err(|_| RiskError::Cohort("model table incomplete".into()))?;
        Ok(ModelSet { models })
    }

    /// Positive-class probability per disease, independently.
    pub fn predict(&self, vitals: &PatientVitals) -> IndexMap<Disease, f64> {
        let features = Array2::from_shape_vec(
            (1, FEATURES),
            vec![
                vitals.age as f64,
                vitals.bmi,
                vitals.bp_systolic as f64,
            ],
        )
        .expect("fixed-size feature row");

        let mut out = IndexMap::with_capacity(Disease::VITALS_MODELED.len());
        for (slot, disease) in Disease::VITALS_MODELED.into_iter().enumerate() {
            out.insert(disease, self.models[slot].probability(&features));
        }
        out
    }
}

fn feature_matrix(cohort: &[TrainingRecord]) -> Array2<f64> {
    let flat: Vec<f64> = cohort
        .iter()
        .flat_map(|r| [r.age as f64, r.bmi, r.bp_systolic as f64])
        .collect();
    Array2::from_shape_vec((cohort.len(), FEATURES), flat).expect("cohort feature matrix")
}

enum EnsembleState {
    Untrained,
    Trained(Arc<ModelSet>),
}

/// Shared, read-mostly ensemble with explicit training state.
pub struct Ensemble {
    state: RwLock<EnsembleState>,
}

impl Default for Ensemble {
    fn default() -> Self {
        Self::new()
    }
}

impl Ensemble {
    pub fn new() -> Self {
        Ensemble {
            state: RwLock::new(EnsembleState::Untrained),
        }
    }

    pub fn is_trained(&self) -> bool {
        matches!(
            *self.state.read().expect("ensemble lock poisoned"),
            EnsembleState::Trained(_)
        )
    }

    /// Fit all models, then publish the new set atomically. Idempotent:
    /// retraining replaces prior state without error.
    pub fn train(&self, cohort: &[TrainingRecord]) -> Result<(), RiskError> {
        let set = ModelSet::fit(cohort)?;
        let mut state = self.state.write().expect("ensemble lock poisoned");
        *state = EnsembleState::Trained(Arc::new(set));
        info!(cohort = cohort.len(), "ensemble trained");
        Ok(())
    }

    /// Predict with the current model set; `UntrainedModel` if none exists.
    pub fn predict(&self, vitals: &PatientVitals) -> Result<IndexMap<Disease, f64>, RiskError> {
        let set = {
            let state = self.state.read().expect("ensemble lock poisoned");
            match &*state {
                EnsembleState::Untrained => return Err(RiskError::UntrainedModel),
                EnsembleState::Trained(set) => Arc::clone(set),
            }
        };
        Ok(set.predict(vitals))
    }

    /// Explicit lazy-train wrapper: load the configured cohort (generating
    /// it first when the file is missing) and train, unless already trained.
    pub fn ensure_trained(&self, settings: &Settings) -> Result<(), RiskError> {
        if self.is_trained() {
            return Ok(());
        }
        let path = settings.cohort_path();
        let cohort = if path.exists() {
            cohort::load(&path)?
        } else {
            info!(path = %path.display(), "cohort missing, generating a fresh one");
            let mut rng = thread_rng();
            let cohort = cohort::generate(&mut rng, settings.cohort_size);
            cohort::persist(&path, &cohort)?;
            cohort
        };
        self.train(&cohort)
    }
}
