//! Store interface for animals.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::AnimalRecord;
use crate::error::StoreError;

/// Read access to the animals store.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpStoreClient`] - REST implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimalStore: Send + Sync {
    /// Fetches every animal record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decoding failures.
    async fn list_animals(&self) -> Result<Vec<AnimalRecord>, StoreError>;

    /// Fetches a single animal by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if the store reports it as not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decoding failures.
    async fn get_animal(&self, id: Uuid) -> Result<Option<AnimalRecord>, StoreError>;
}
