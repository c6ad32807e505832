//! # Shelter Stats
//!
//! A statistics service for animal shelter records built with Axum. Every
//! statistic is computed at query time from raw records fetched from
//! independent REST record stores that offer no joins or grouping.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Records, store traits and pure aggregation
//! - **Application Layer** ([`application`]) - Reference resolution and statistics services
//! - **Infrastructure Layer** ([`infrastructure`]) - REST record store client
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Cross-store reference resolution with bounded concurrency
//! - Rankings with stable tie-breaking and two-decimal percentages
//! - Monthly trends over a configurable lookback window
//! - Partial-failure tolerance: unresolvable references never fail a statistic
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! export STORE_API_URL="http://localhost:8080"
//!
//! # Start the service
//! cargo run
//!
//! # Or print a statistic from the terminal
//! cargo run --bin shelter-stats-cli -- summary
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ActivityService, AdoptionStatsService, DonationStatsService, ReferenceResolver,
        VolunteerStatsService,
    };
    pub use crate::domain::aggregation::{CategoryCount, MonthlyBucket};
    pub use crate::domain::stores::RecordStores;
    pub use crate::error::{AppError, StoreError};
    pub use crate::infrastructure::http::HttpStoreClient;
    pub use crate::state::AppState;
}
