//! Handlers for adoption statistics.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::category::breakdown;
use crate::api::dto::{
    AdoptionSummaryResponse, CategoryCountDto, LookbackParams, MonthlyAdoptionsDto,
};
use crate::error::AppError;
use crate::state::AppState;

/// Adoption overview.
///
/// # Endpoint
///
/// `GET /api/stats/adoptions`
///
/// # Errors
///
/// Returns 502 Bad Gateway if the adoptions store cannot be listed.
pub async fn adoption_summary_handler(
    State(state): State<AppState>,
) -> Result<Json<AdoptionSummaryResponse>, AppError> {
    let summary = state.adoption_stats.summary().await?;
    Ok(Json(summary.into()))
}

/// Species ranked by number of adoptions.
///
/// # Endpoint
///
/// `GET /api/stats/adoptions/species`
pub async fn species_ranking_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryCountDto>>, AppError> {
    let ranking = state.adoption_stats.species_ranking().await?;
    Ok(Json(breakdown(ranking)))
}

/// Shelters ranked by number of adoptions.
///
/// # Endpoint
///
/// `GET /api/stats/adoptions/shelters`
pub async fn shelter_ranking_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryCountDto>>, AppError> {
    let ranking = state.adoption_stats.shelter_ranking().await?;
    Ok(Json(breakdown(ranking)))
}

/// Adoptions per month.
///
/// # Endpoint
///
/// `GET /api/stats/adoptions/monthly`
///
/// # Query Parameters
///
/// - `meses` (optional): Lookback window in months (default: configured, 1-120)
///
/// # Errors
///
/// Returns 400 Bad Request if `meses` is not a number in range.
pub async fn monthly_adoptions_handler(
    State(state): State<AppState>,
    params: Result<Query<LookbackParams>, QueryRejection>,
) -> Result<Json<Vec<MonthlyAdoptionsDto>>, AppError> {
    let Query(params) = params?;
    let months = params.months_or(state.default_lookback_months)?;

    let trend = state.adoption_stats.monthly_trend(months).await?;

    Ok(Json(trend.into_iter().map(MonthlyAdoptionsDto::from).collect()))
}
