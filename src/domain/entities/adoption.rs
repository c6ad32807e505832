//! Adoption record fetched from the adoptions store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::aggregation::filters::{EXCLUDED_ADOPTION_STATUSES, is_countable};

/// A single adoption as reported by the adoptions store.
///
/// The publication reference is the entry point of the
/// adoption → publication → animal chain used for species and shelter breakdowns.
#[derive(Debug, Clone, PartialEq)]
pub struct AdoptionRecord {
    pub id: Uuid,
    pub adopted_at: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub publication_id: Option<Uuid>,
}

impl AdoptionRecord {
    /// Creates a new adoption record.
    pub fn new(
        id: Uuid,
        adopted_at: Option<DateTime<Utc>>,
        status: Option<String>,
        publication_id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            adopted_at,
            status,
            publication_id,
        }
    }

    /// Returns true unless the adoption was rejected or cancelled.
    ///
    /// Adoptions without a status are not counted either.
    pub fn is_countable(&self) -> bool {
        is_countable(self.status.as_deref(), EXCLUDED_ADOPTION_STATUSES)
    }
}
