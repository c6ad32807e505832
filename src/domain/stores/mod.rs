//! Record store interfaces for the domain layer.
//!
//! Each remote store exposes exactly two operations: list everything, or
//! fetch one record by id. The aggregation services only ever see these
//! traits; concrete clients live in `crate::infrastructure::http`.
//!
//! # Result Conventions
//!
//! - `Ok(Some(record))` / `Ok(records)` - the store answered
//! - `Ok(None)` - the store reported the id as not found
//! - `Err(StoreError)` - transport, status, or decoding failure
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` for unit tests. The
//! REST client is covered by `tests/http_store_client.rs`.

pub mod adoption_store;
pub mod animal_store;
pub mod campaign_store;
pub mod campaign_type_store;
pub mod payment_store;
pub mod publication_store;
pub mod shelter_store;
pub mod volunteer_store;

use std::sync::Arc;

pub use adoption_store::AdoptionStore;
pub use animal_store::AnimalStore;
pub use campaign_store::CampaignStore;
pub use campaign_type_store::CampaignTypeStore;
pub use payment_store::PaymentStore;
pub use publication_store::PublicationStore;
pub use shelter_store::ShelterStore;
pub use volunteer_store::VolunteerStore;

#[cfg(test)]
pub use adoption_store::MockAdoptionStore;
#[cfg(test)]
pub use animal_store::MockAnimalStore;
#[cfg(test)]
pub use campaign_store::MockCampaignStore;
#[cfg(test)]
pub use campaign_type_store::MockCampaignTypeStore;
#[cfg(test)]
pub use payment_store::MockPaymentStore;
#[cfg(test)]
pub use publication_store::MockPublicationStore;
#[cfg(test)]
pub use shelter_store::MockShelterStore;
#[cfg(test)]
pub use volunteer_store::MockVolunteerStore;

/// Handles to every record store, injected into the statistics services.
#[derive(Clone)]
pub struct RecordStores {
    pub adoptions: Arc<dyn AdoptionStore>,
    pub publications: Arc<dyn PublicationStore>,
    pub animals: Arc<dyn AnimalStore>,
    pub shelters: Arc<dyn ShelterStore>,
    pub payments: Arc<dyn PaymentStore>,
    pub volunteers: Arc<dyn VolunteerStore>,
    pub campaigns: Arc<dyn CampaignStore>,
    pub campaign_types: Arc<dyn CampaignTypeStore>,
}

impl RecordStores {
    /// Uses one client for every store.
    pub fn from_client<C>(client: Arc<C>) -> Self
    where
        C: AdoptionStore
            + PublicationStore
            + AnimalStore
            + ShelterStore
            + PaymentStore
            + VolunteerStore
            + CampaignStore
            + CampaignTypeStore
            + 'static,
    {
        Self {
            adoptions: client.clone(),
            publications: client.clone(),
            animals: client.clone(),
            shelters: client.clone(),
            payments: client.clone(),
            volunteers: client.clone(),
            campaigns: client.clone(),
            campaign_types: client,
        }
    }
}
