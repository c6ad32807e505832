//! Handler for monthly system activity.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::{LookbackParams, MonthlyActivityDto};
use crate::error::AppError;
use crate::state::AppState;

/// Adoptions, publications and donations per month.
///
/// # Endpoint
///
/// `GET /api/stats/activity/monthly`
///
/// # Query Parameters
///
/// - `meses` (optional): Lookback window in months (default: configured, 1-120)
///
/// # Response
///
/// Never fails because of the record stores: a store that cannot be listed
/// contributes zero to every month.
pub async fn monthly_activity_handler(
    State(state): State<AppState>,
    params: Result<Query<LookbackParams>, QueryRejection>,
) -> Result<Json<Vec<MonthlyActivityDto>>, AppError> {
    let Query(params) = params?;
    let months = params.months_or(state.default_lookback_months)?;

    let activity = state.activity.monthly_activity(months).await;

    Ok(Json(activity.into_iter().map(MonthlyActivityDto::from).collect()))
}
