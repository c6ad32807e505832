//! API route configuration.

use crate::api::handlers::{
    adoption_summary_handler, campaign_type_participation_handler, donation_summary_handler,
    monthly_activity_handler, monthly_adoptions_handler, shelter_ranking_handler,
    species_ranking_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Statistics routes, nested under `/api/stats`.
///
/// # Endpoints
///
/// - `GET /adoptions`                - Adoption overview
/// - `GET /adoptions/species`        - Species ranking
/// - `GET /adoptions/shelters`       - Shelter ranking
/// - `GET /adoptions/monthly`        - Monthly adoption trend (`?meses=N`)
/// - `GET /volunteers/campaign-types` - Volunteer participation per campaign type
/// - `GET /donations`                - Donation overview
/// - `GET /activity/monthly`         - Monthly system activity (`?meses=N`)
pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/adoptions", get(adoption_summary_handler))
        .route("/adoptions/species", get(species_ranking_handler))
        .route("/adoptions/shelters", get(shelter_ranking_handler))
        .route("/adoptions/monthly", get(monthly_adoptions_handler))
        .route(
            "/volunteers/campaign-types",
            get(campaign_type_participation_handler),
        )
        .route("/donations", get(donation_summary_handler))
        .route("/activity/monthly", get(monthly_activity_handler))
}
