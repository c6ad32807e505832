//! Campaign and campaign type records.

use uuid::Uuid;

use super::animal::non_blank;

/// A campaign volunteers can join.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignRecord {
    pub id: Uuid,
    pub campaign_type_id: Option<Uuid>,
}

impl CampaignRecord {
    /// Creates a new campaign record.
    pub fn new(id: Uuid, campaign_type_id: Option<Uuid>) -> Self {
        Self {
            id,
            campaign_type_id,
        }
    }
}

/// Classification of campaigns (education, rescue, sterilization, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignTypeRecord {
    pub id: Uuid,
    pub name: Option<String>,
}

impl CampaignTypeRecord {
    /// Creates a new campaign type record.
    pub fn new(id: Uuid, name: Option<String>) -> Self {
        Self { id, name }
    }

    /// Type name, or `None` when the store left it blank.
    pub fn name_label(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }
}
