//! Store interface for volunteers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::VolunteerRecord;
use crate::error::StoreError;

/// Read access to the volunteers store.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpStoreClient`] - REST implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VolunteerStore: Send + Sync {
    /// Fetches every volunteer record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decoding failures.
    async fn list_volunteers(&self) -> Result<Vec<VolunteerRecord>, StoreError>;

    /// Fetches a single volunteer by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if the store reports it as not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decoding failures.
    async fn get_volunteer(&self, id: Uuid) -> Result<Option<VolunteerRecord>, StoreError>;
}
