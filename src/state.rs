//! Shared application state injected into every handler.

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{
    ActivityService, AdoptionStatsService, DonationStatsService, ReferenceResolver,
    VolunteerStatsService,
};
use crate::config::Config;
use crate::domain::stores::RecordStores;
use crate::infrastructure::http::HttpStoreClient;

#[derive(Clone)]
pub struct AppState {
    pub adoption_stats: Arc<AdoptionStatsService>,
    pub volunteer_stats: Arc<VolunteerStatsService>,
    pub donation_stats: Arc<DonationStatsService>,
    pub activity: Arc<ActivityService>,
    pub store_client: Arc<HttpStoreClient>,
    /// Lookback window used when a trend request omits `meses`.
    pub default_lookback_months: u32,
}

impl AppState {
    /// Wires every service to the given store client.
    pub fn new(
        store_client: Arc<HttpStoreClient>,
        resolve_concurrency: usize,
        default_lookback_months: u32,
    ) -> Self {
        let stores = RecordStores::from_client(store_client.clone());
        let resolver = ReferenceResolver::new(&stores, resolve_concurrency);

        Self {
            adoption_stats: Arc::new(AdoptionStatsService::new(&stores, resolver.clone())),
            volunteer_stats: Arc::new(VolunteerStatsService::new(&stores, resolver)),
            donation_stats: Arc::new(DonationStatsService::new(&stores)),
            activity: Arc::new(ActivityService::new(&stores)),
            store_client,
            default_lookback_months,
        }
    }

    /// Builds the store client and services described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store URL is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HttpStoreClient::new(&config.store_api_url, config.store_timeout())?;

        Ok(Self::new(
            Arc::new(client),
            config.resolve_concurrency,
            config.default_lookback_months,
        ))
    }
}
