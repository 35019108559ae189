//! Weather provider with a fixed default fallback.
//!
//! Availability beats precision here: any fetch failure, timeout or missing
//! API key substitutes the default observation instead of failing the
//! assessment.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Settings;
use crate::error::RiskError;

/// Where an observation came from. The fallback snapshot carries a fixed
/// multiplier table instead of running the weather formula (see
/// `risk::environment::multipliers_for`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationSource {
    Upstream,
    DefaultFallback,
}

/// One weather snapshot for a city, fetched per assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub city: String,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub rainfall_mm: f64,
    pub wind_speed_kmh: f64,
    pub condition: String,
    pub source: ObservationSource,
    pub fetched_at: DateTime<Utc>,
}

/// The substitute used whenever the upstream source is unreachable.
pub fn default_observation(city: &str) -> WeatherObservation {
    WeatherObservation {
        city: city.to_string(),
        temperature_celsius: 28.0,
        humidity_percent: 75.0,
        rainfall_mm: 0.0,
        wind_speed_kmh: 10.0,
        condition: "cloudy".to_string(),
        source: ObservationSource::DefaultFallback,
        fetched_at: Utc::now(),
    }
}

/// Fetch current weather; errors are typed so the caller decides whether to
/// substitute.
pub async fn current_weather(
    settings: &Settings,
    city: &str,
) -> Result<WeatherObservation, RiskError> {
    let key = settings
        .weather_api_key
        .as_deref()
        .ok_or(RiskError::UpstreamUnavailable {
            provider: "weather",
            reason: "no API key configured".to_string(),
        })?;

    let client = http_client(settings)?;
    let url = format!(
        "{base}/weather?q={city}&appid={key}&units=metric",
        base = settings.weather_api_base
    );
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| upstream_error(e.to_string()))?;
    if !response.status().is_success() {
        return Err(upstream_error(format!("status {}", response.status())));
    }
    let payload: OpenWeatherResponse = response
        .json()
        .await
        .map_err(|e| upstream_error(e.to_string()))?;

    Ok(WeatherObservation {
        city: city.to_string(),
        temperature_celsius: payload.main.temp,
        humidity_percent: payload.main.humidity,
        rainfall_mm: payload.rain.and_then(|r| r.one_hour).unwrap_or(0.0),
        wind_speed_kmh: payload.wind.speed * 3.6,
        condition: payload
            .weather
            .first()
            .map(|w| w.main.to_lowercase())
            .unwrap_or_else(|| "unknown".to_string()),
        source: ObservationSource::Upstream,
        fetched_at: Utc::now(),
    })
}

/// Fetch with the documented fallback. Never fails.
pub async fn current_weather_or_default(settings: &Settings, city: &str) -> WeatherObservation {
    match current_weather(settings, city).await {
        Ok(observation) => observation,
        Err(err) => {
            warn!(%city, %err, "weather fetch failed, using default observation");
            default_observation(city)
        }
    }
}

fn upstream_error(reason: String) -> RiskError {
    RiskError::UpstreamUnavailable {
        provider: "weather",
        reason,
    }
}

fn http_client(settings: &Settings) -> Result<Client, RiskError> {
    Client::builder()
        .user_agent("health-sentinel/0.1")
        .timeout(settings.fetch_timeout)
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(|e| upstream_error(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    main: MainSection,
    wind: WindSection,
    #[serde(default)]
    rain: Option<RainSection>,
    #[serde(default)]
    weather: Vec<ConditionSection>,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WindSection {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct RainSection {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ConditionSection {
    main: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_name_the_weather_provider() {
        let err = upstream_error("status 503".to_string());
        assert!(matches!(
            &err,
            RiskError::UpstreamUnavailable { provider: "weather", .. }
        ));
        assert_eq!(err.to_string(), "upstream weather unavailable: status 503");
    }

    #[test]
    fn default_observation_matches_documented_constants() {
        let obs = default_observation("dhaka");
        assert_eq!(obs.city, "dhaka");
        assert!((obs.temperature_celsius - 28.0).abs() < 1e-9);
        assert!((obs.humidity_percent - 75.0).abs() < 1e-9);
        assert!((obs.rainfall_mm - 0.0).abs() < 1e-9);
    }
}
