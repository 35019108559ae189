use health_sentinel::context::weather::{self, WeatherObservation};
use health_sentinel::domain::Disease;
use health_sentinel::risk::environment::{disease_multipliers, multipliers_for};
use proptest::prelude::*;

fn observation(temp: f64, humidity: f64, rainfall: f64) -> WeatherObservation {
    let mut obs = weather::default_observation("testville");
    obs.temperature_celsius = temp;
    obs.humidity_percent = humidity;
    obs.rainfall_mm = rainfall;
    obs
}

#[test]
fn monsoon_scenario_compounds_to_44_1() {
    let multipliers = disease_multipliers(&observation(27.0, 85.0, 15.0));
    assert!((multipliers[&Disease::Dengue] - 44.1).abs() < 1e-9);
}

#[test]
fn fallback_observation_carries_fixed_multipliers() {
    // Fetch failure substitutes temp 28 / humidity 75 / rainfall 0 and the
    // fixed multiplier table, not the formula over those defaults.
    let fallback = weather::default_observation("anywhere");
    assert!((fallback.temperature_celsius - 28.0).abs() < 1e-9);
    assert!((fallback.humidity_percent - 75.0).abs() < 1e-9);
    assert!((fallback.rainfall_mm - 0.0).abs() < 1e-9);

    let multipliers = multipliers_for(&fallback);
    assert!((multipliers[&Disease::Dengue] - 2.5).abs() < 1e-9);
    assert!((multipliers[&Disease::Malaria] - 1.5).abs() < 1e-9);
    assert!((multipliers[&Disease::Flu] - 1.0).abs() < 1e-9);
}

#[test]
fn all_multipliers_are_at_least_one() {
    for (temp, humidity, rain) in [
        (5.0, 20.0, 0.0),
        (28.0, 95.0, 25.0),
        (40.0, 50.0, 0.0),
        (-10.0, 10.0, 2.0),
    ] {
        for (_, m) in disease_multipliers(&observation(temp, humidity, rain)) {
            assert!(m >= 1.0, "multiplier {m} below 1.0");
        }
    }
}

proptest! {
    #[test]
    fn dengue_multiplier_monotonic_in_humidity(
        h1 in 70.0f64..100.0,
        h2 in 70.0f64..100.0,
        temp in 0.0f64..40.0,
        rain in 0.0f64..30.0,
    ) {
        let (lo, hi) = if h1 <= h2 { (h1, h2) } else { (h2, h1) };
        let low = disease_multipliers(&observation(temp, lo, rain))[&Disease::Dengue];
        let high = disease_multipliers(&observation(temp, hi, rain))[&Disease::Dengue];
        prop_assert!(low <= high);
    }

    #[test]
    fn dengue_multiplier_monotonic_in_rainfall(
        r1 in 0.0f64..50.0,
        r2 in 0.0f64..50.0,
        temp in 0.0f64..40.0,
        humidity in 0.0f64..100.0,
    ) {
        let (lo, hi) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
        let low = disease_multipliers(&observation(temp, humidity, lo))[&Disease::Dengue];
        let high = disease_multipliers(&observation(temp, humidity, hi))[&Disease::Dengue];
        prop_assert!(low <= high);
    }
}
