//! Store interface for payments.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::PaymentRecord;
use crate::error::StoreError;

/// Read access to the payments store.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpStoreClient`] - REST implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Fetches every payment record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decoding failures.
    async fn list_payments(&self) -> Result<Vec<PaymentRecord>, StoreError>;

    /// Fetches a single payment by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if the store reports it as not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decoding failures.
    async fn get_payment(&self, id: Uuid) -> Result<Option<PaymentRecord>, StoreError>;
}
