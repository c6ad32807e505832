//! Store interface for campaigns.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::CampaignRecord;
use crate::error::StoreError;

/// Read access to the campaigns store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// Fetches every campaign.
    async fn list_campaigns(&self) -> Result<Vec<CampaignRecord>, StoreError>;

    /// Fetches a campaign by id; `Ok(None)` when it does not exist.
    async fn get_campaign(&self, id: Uuid) -> Result<Option<CampaignRecord>, StoreError>;
}
