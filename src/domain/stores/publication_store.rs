//! Store interface for publications.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::PublicationRecord;
use crate::error::StoreError;

/// Read access to the publications store.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpStoreClient`] - REST implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PublicationStore: Send + Sync {
    /// Fetches every publication record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decoding failures.
    async fn list_publications(&self) -> Result<Vec<PublicationRecord>, StoreError>;

    /// Fetches a single publication by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if the store reports it as not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decoding failures.
    async fn get_publication(&self, id: Uuid) -> Result<Option<PublicationRecord>, StoreError>;
}
