//! Store interface for adoptions.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::AdoptionRecord;
use crate::error::StoreError;

/// Read access to the adoptions store.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpStoreClient`] - REST implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdoptionStore: Send + Sync {
    /// Fetches every adoption record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decoding failures.
    async fn list_adoptions(&self) -> Result<Vec<AdoptionRecord>, StoreError>;

    /// Fetches a single adoption by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if the store reports it as not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decoding failures.
    async fn get_adoption(&self, id: Uuid) -> Result<Option<AdoptionRecord>, StoreError>;
}
