//! Store interface for campaign types.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::CampaignTypeRecord;
use crate::error::StoreError;

/// Read access to the campaign types store.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpStoreClient`] - REST implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignTypeStore: Send + Sync {
    /// Fetches every campaign type.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decoding failures.
    async fn list_campaign_types(&self) -> Result<Vec<CampaignTypeRecord>, StoreError>;

    /// Fetches a single campaign type by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if the store reports it as not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decoding failures.
    async fn get_campaign_type(&self, id: Uuid) -> Result<Option<CampaignTypeRecord>, StoreError>;
}
