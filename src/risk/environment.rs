//! Weather-to-disease multiplier model.
//!
//! Pure function of one observation. Factors compound multiplicatively:
//! hot, humid and rainy conditions each amplify dengue on their own, and
//! together they amplify it a lot more than any single condition.

use indexmap::IndexMap;

use crate::context::weather::{ObservationSource, WeatherObservation};
use crate::domain::Disease;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Multipliers shipped with the fallback snapshot. The upstream substitute
/// carries its own fixed table rather than running the formula over the
/// default vitals.
pub fn default_multipliers() -> IndexMap<Disease, f64> {
    IndexMap::from([
        (Disease::Dengue, 2.5),
        (Disease::Malaria, 1.5),
        (Disease::Flu, 1.0),
    ])
}

/// Multipliers for an observation, honouring its provenance.
pub fn multipliers_for(observation: &WeatherObservation) -> IndexMap<Disease, f64> {
    match observation.source {
        ObservationSource::Upstream => disease_multipliers(observation),
        ObservationSource::DefaultFallback => default_multipliers(),
    }
}

/// Per-disease multiplicative risk factor, each ≥ 1.0, rounded to 2 decimals.
pub fn disease_multipliers(observation: &WeatherObservation) -> IndexMap<Disease, f64> {
    let temp = observation.temperature_celsius;
    let humidity = observation.humidity_percent;
    let rainfall = observation.rainfall_mm;

    let mut multipliers = IndexMap::new();

    let mut dengue = 1.0;
    if humidity > 80.0 {
        dengue *= 4.2;
    } else if humidity > 70.0 {
        dengue *= 2.5;
    }
    if (25.0..=30.0).contains(&temp) {
        dengue *= 3.5;
    }
    if rainfall > 10.0 {
        dengue *= 3.0;
    }
    multipliers.insert(Disease::Dengue, round2(dengue));

    let mut malaria = 1.0;
    if humidity > 75.0 {
        malaria *= 3.1;
    }
    if (20.0..=30.0).contains(&temp) {
        malaria *= 2.8;
    }
    multipliers.insert(Disease::Malaria, round2(malaria));

    let mut flu = 1.0;
    if temp < 20.0 {
        flu *= 1.6;
    }
    if humidity < 40.0 {
        flu *= 1.8;
    }
    multipliers.insert(Disease::Flu, round2(flu));

    multipliers
}
