//! Statistics services for the application layer.

pub mod activity_service;
pub mod adoption_stats_service;
pub mod donation_stats_service;
pub mod reference_resolver;
pub mod volunteer_stats_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use activity_service::{ActivityService, MonthlyActivity};
pub use adoption_stats_service::{AdoptionStatsService, AdoptionSummary};
pub use donation_stats_service::{DonationStatsService, DonationSummary};
pub use reference_resolver::{
    DEFAULT_RESOLVE_CONCURRENCY, Placement, ReferenceResolver, Resolution, ResolutionFailure,
};
pub use volunteer_stats_service::{CampaignTypeParticipation, VolunteerStatsService};
