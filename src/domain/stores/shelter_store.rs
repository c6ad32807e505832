//! Store interface for shelters.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::ShelterRecord;
use crate::error::StoreError;

/// Read access to the shelters store.
///
/// Only the last hop of the adoption → shelter chain uses it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShelterStore: Send + Sync {
    async fn list_shelters(&self) -> Result<Vec<ShelterRecord>, StoreError>;

    /// `Ok(None)` when the store has no shelter with this id.
    async fn get_shelter(&self, id: Uuid) -> Result<Option<ShelterRecord>, StoreError>;
}
