//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod activity;
pub mod adoptions;
pub mod donations;
pub mod fallback;
pub mod health;
pub mod volunteers;

pub use activity::monthly_activity_handler;
pub use adoptions::{
    adoption_summary_handler, monthly_adoptions_handler, shelter_ranking_handler,
    species_ranking_handler,
};
pub use donations::donation_summary_handler;
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use volunteers::campaign_type_participation_handler;
