//! Handler for volunteer participation.

use axum::{Json, extract::State};

use crate::api::dto::CampaignTypeParticipationDto;
use crate::error::AppError;
use crate::state::AppState;

/// Volunteer participation grouped by campaign type.
///
/// # Endpoint
///
/// `GET /api/stats/volunteers/campaign-types`
///
/// # Errors
///
/// Returns 502 Bad Gateway if the volunteers store cannot be listed.
pub async fn campaign_type_participation_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CampaignTypeParticipationDto>>, AppError> {
    let rows = state.volunteer_stats.participation().await?;
    Ok(Json(
        rows.into_iter()
            .map(CampaignTypeParticipationDto::from)
            .collect(),
    ))
}
