//! Publication record fetched from the publications store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An adoption listing that points at the animal being offered.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicationRecord {
    pub id: Uuid,
    pub published_at: Option<DateTime<Utc>>,
    pub animal_id: Option<Uuid>,
}

impl PublicationRecord {
    /// Creates a new publication record.
    pub fn new(id: Uuid, published_at: Option<DateTime<Utc>>, animal_id: Option<Uuid>) -> Self {
        Self {
            id,
            published_at,
            animal_id,
        }
    }
}
