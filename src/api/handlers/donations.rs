//! Handler for donation statistics.

use axum::{Json, extract::State};

use crate::api::dto::DonationSummaryResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Donation overview.
///
/// # Endpoint
///
/// `GET /api/stats/donations`
///
/// # Errors
///
/// Returns 502 Bad Gateway if the payments store cannot be listed.
pub async fn donation_summary_handler(
    State(state): State<AppState>,
) -> Result<Json<DonationSummaryResponse>, AppError> {
    let summary = state.donation_stats.summary().await?;
    Ok(Json(summary.into()))
}
