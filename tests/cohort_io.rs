use health_sentinel::cohort;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

#[test]
fn cohort_round_trips_through_csv() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("cohort.csv");

    let mut rng = StdRng::seed_from_u64(5);
    let records = cohort::generate(&mut rng, 250);
    cohort::persist(&path, &records).expect("persist cohort");

    let loaded = cohort::load(&path).expect("load cohort");
    assert_eq!(loaded.len(), records.len());
    for (original, reloaded) in records.iter().zip(&loaded) {
        assert_eq!(original.age, reloaded.age);
        assert_eq!(original.bp_systolic, reloaded.bp_systolic);
        assert!((original.bmi - reloaded.bmi).abs() < 1e-9);
        assert_eq!(original.symptoms, reloaded.symptoms);
        assert_eq!(original.labels, reloaded.labels);
    }
}

#[test]
fn loading_missing_cohort_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("missing.csv");
    assert!(cohort::load(&path).is_err());
}
