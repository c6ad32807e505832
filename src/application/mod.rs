//! Application layer: the statistics assembled from the record stores.
//!
//! Services consume the store traits from [`crate::domain::stores`], resolve
//! cross-store references, and hand plain labels to the aggregation
//! primitives in [`crate::domain::aggregation`].
//!
//! # Available Services
//!
//! - [`services::ReferenceResolver`] - Follows foreign keys across stores
//! - [`services::AdoptionStatsService`] - Species and shelter rankings, trend, summary
//! - [`services::VolunteerStatsService`] - Participation per campaign type
//! - [`services::DonationStatsService`] - Donation totals and distributions
//! - [`services::ActivityService`] - Monthly activity across three stores

pub mod services;
