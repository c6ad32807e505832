//! Volunteer participation per campaign type.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::reference_resolver::ReferenceResolver;
use crate::domain::aggregation::percentage_of;
use crate::domain::stores::{RecordStores, VolunteerStore};
use crate::error::AppError;

/// Volunteers enrolled in campaigns of one type.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignTypeParticipation {
    pub campaign_type: String,
    pub total_volunteers: u64,
    pub participation_percentage: f64,
    pub active_volunteers: u64,
    pub inactive_volunteers: u64,
}

impl CampaignTypeParticipation {
    fn new(campaign_type: String) -> Self {
        Self {
            campaign_type,
            total_volunteers: 0,
            participation_percentage: 0.0,
            active_volunteers: 0,
            inactive_volunteers: 0,
        }
    }
}

/// Service computing volunteer participation per campaign type.
///
/// Campaign types are resolved through the [`ReferenceResolver`];
/// volunteers whose chain cannot be resolved are left out of every row.
pub struct VolunteerStatsService {
    volunteers: Arc<dyn VolunteerStore>,
    resolver: ReferenceResolver,
}

impl VolunteerStatsService {
    /// Creates a new volunteer statistics service.
    pub fn new(stores: &RecordStores, resolver: ReferenceResolver) -> Self {
        Self {
            volunteers: stores.volunteers.clone(),
            resolver,
        }
    }

    /// Groups volunteers by the type of campaign they joined.
    ///
    /// Percentages are relative to the volunteers whose campaign type could
    /// be resolved. Types are ordered by volunteer count, ties in the order
    /// first seen. Returns an empty list when nothing resolves.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the volunteers store cannot be listed.
    pub async fn participation(&self) -> Result<Vec<CampaignTypeParticipation>, AppError> {
        let volunteers = self.volunteers.list_volunteers().await?;
        let types = self.resolver.resolve_all_campaign_types(&volunteers).await;

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<CampaignTypeParticipation> = Vec::new();

        for (volunteer, campaign_type) in volunteers.iter().zip(types) {
            let Some(campaign_type) = campaign_type else {
                continue;
            };

            let slot = *index.entry(campaign_type.clone()).or_insert_with(|| {
                rows.push(CampaignTypeParticipation::new(campaign_type));
                rows.len() - 1
            });

            let row = &mut rows[slot];
            row.total_volunteers += 1;
            if volunteer.is_active() {
                row.active_volunteers += 1;
            } else {
                row.inactive_volunteers += 1;
            }
        }

        let resolved: u64 = rows.iter().map(|r| r.total_volunteers).sum();
        debug!(
            fetched = volunteers.len(),
            resolved,
            campaign_types = rows.len(),
            "Volunteer participation computed"
        );

        rows.sort_by(|a, b| b.total_volunteers.cmp(&a.total_volunteers));
        for row in &mut rows {
            row.participation_percentage = percentage_of(row.total_volunteers, resolved);
        }

        Ok(rows)
    }
}
