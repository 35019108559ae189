//! Runtime configuration utilities for health-sentinel.

use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Root folder for generated data artefacts.
    pub data_dir: PathBuf,
    /// Default size of a freshly generated training cohort.
    pub cohort_size: usize,
    /// Base URL of the OpenWeather-compatible weather provider.
    pub weather_api_base: String,
    /// Weather provider API key; a missing key forces the default observation.
    pub weather_api_key: Option<String>,
    /// Timeout applied to every upstream fetch.
    #[serde(skip, default = "default_fetch_timeout")]
    pub fetch_timeout: Duration,
}

fn default_fetch_timeout() -> Duration {
    Duration::from_secs(5)
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let cohort_size = env::var("COHORT_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2000);
        let weather_api_base = env::var("WEATHER_API_BASE")
            .unwrap_or_else(|_| "https://api.openweathermap.org/data/2.5".to_string());
        let weather_api_key = env::var("OPENWEATHER_API_KEY").ok();
        let fetch_timeout = Duration::from_secs(
            env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        );

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;

        Ok(Self {
            data_dir,
            cohort_size,
            weather_api_base,
            weather_api_key,
            fetch_timeout,
        })
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }

    /// Location of the persisted training cohort.
    pub fn cohort_path(&self) -> PathBuf {
        self.join_data("synthetic_cohort.csv")
    }
}
