//! Volunteer record fetched from the volunteers store.

use uuid::Uuid;

use crate::domain::aggregation::filters::{ACTIVE_VOLUNTEER_STATUSES, status_in};

/// A volunteer enrolled (optionally) in a campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct VolunteerRecord {
    pub id: Uuid,
    pub status: Option<String>,
    pub campaign_id: Option<Uuid>,
}

impl VolunteerRecord {
    /// Creates a new volunteer record.
    pub fn new(id: Uuid, status: Option<String>, campaign_id: Option<Uuid>) -> Self {
        Self {
            id,
            status,
            campaign_id,
        }
    }

    /// Returns true when the volunteer is currently active.
    pub fn is_active(&self) -> bool {
        status_in(self.status.as_deref(), ACTIVE_VOLUNTEER_STATUSES)
    }
}
