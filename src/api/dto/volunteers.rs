//! DTOs for volunteer participation.

use serde::Serialize;

use crate::application::services::CampaignTypeParticipation;

#[derive(Debug, Clone, Serialize)]
pub struct CampaignTypeParticipationDto {
    pub tipo_campania: String,
    pub total_voluntarios: u64,
    pub porcentaje_participacion: f64,
    pub voluntarios_activos: u64,
    pub voluntarios_inactivos: u64,
}

impl From<CampaignTypeParticipation> for CampaignTypeParticipationDto {
    fn from(p: CampaignTypeParticipation) -> Self {
        Self {
            tipo_campania: p.campaign_type,
            total_voluntarios: p.total_volunteers,
            porcentaje_participacion: p.participation_percentage,
            voluntarios_activos: p.active_volunteers,
            voluntarios_inactivos: p.inactive_volunteers,
        }
    }
}
