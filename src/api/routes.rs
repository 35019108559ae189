//! HTTP route handlers for Axum.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rand::thread_rng;
use tracing::warn;

use crate::{
    api::types::{AssessRequest, RiskScoreDto},
    context::{trend, weather},
    domain::PatientVitals,
    error::RiskError,
    risk,
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

/// Ensemble path: vitals + free-text symptoms.
pub async fn assess(
    State(state): State<AppState>,
    Json(request): Json<AssessRequest>,
) -> ApiResult<Vec<RiskScoreDto>> {
    let vitals: PatientVitals = request.into();
    state
        .ensemble
        .ensure_trained(&state.settings)
        .map_err(into_response)?;
    let scores = risk::assess(&state.ensemble, &vitals).map_err(into_response)?;
    Ok(Json(scores.values().map(RiskScoreDto::from).collect()))
}

/// Environmental path: regional weather and case trends for a city.
pub async fn outlook(
    Path(city): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Vec<RiskScoreDto>> {
    let observation = weather::current_weather_or_default(&state.settings, &city).await;
    let trends = trend::sample_trends(&mut thread_rng(), &city);
    let scores = risk::assess_with_context(&observation, &trends);
    Ok(Json(scores.values().map(RiskScoreDto::from).collect()))
}

fn into_response(err: RiskError) -> (StatusCode, String) {
    let status = match &err {
        RiskError::InvalidVitals(_) => StatusCode::UNPROCESSABLE_ENTITY,
        RiskError::UnknownDisease(_) => StatusCode::BAD_REQUEST,
        RiskError::UntrainedModel => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        warn!(%err, "assessment failed");
    }
    (status, err.to_string())
}
