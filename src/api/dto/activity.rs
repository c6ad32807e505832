//! DTOs for monthly system activity.

use serde::Serialize;

use crate::application::services::MonthlyActivity;

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyActivityDto {
    pub periodo: String,
    pub total_adopciones: u64,
    pub total_publicaciones: u64,
    pub total_donaciones: u64,
    pub monto_total_donado: f64,
}

impl From<MonthlyActivity> for MonthlyActivityDto {
    fn from(m: MonthlyActivity) -> Self {
        Self {
            periodo: m.period,
            total_adopciones: m.adoptions,
            total_publicaciones: m.publications,
            total_donaciones: m.donations,
            monto_total_donado: m.donated_amount,
        }
    }
}
