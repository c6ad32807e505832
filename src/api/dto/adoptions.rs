//! DTOs for adoption statistics.

use serde::Serialize;

use super::category::{CategoryCountDto, breakdown};
use crate::application::services::AdoptionSummary;
use crate::domain::aggregation::MonthlyBucket;

/// Adoptions recorded in one month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyAdoptionsDto {
    pub periodo: String,
    pub total_adopciones: u64,
    pub especies_adoptadas: Vec<CategoryCountDto>,
}

impl From<MonthlyBucket> for MonthlyAdoptionsDto {
    fn from(b: MonthlyBucket) -> Self {
        Self {
            periodo: b.period,
            total_adopciones: b.total,
            especies_adoptadas: breakdown(b.breakdown),
        }
    }
}

/// Adoption overview returned by `GET /api/stats/adoptions`.
///
/// `promedio_dias_adopcion` is always serialized, as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct AdoptionSummaryResponse {
    pub total_adopciones: u64,
    pub adopciones_mes_actual: u64,
    pub adopciones_anio_actual: u64,
    pub promedio_dias_adopcion: Option<f64>,
    pub especies_mas_adoptadas: Vec<CategoryCountDto>,
    pub refugios_mas_adopciones: Vec<CategoryCountDto>,
    pub tendencia_mensual: Vec<MonthlyAdoptionsDto>,
}

impl From<AdoptionSummary> for AdoptionSummaryResponse {
    fn from(s: AdoptionSummary) -> Self {
        Self {
            total_adopciones: s.total_adoptions,
            adopciones_mes_actual: s.adoptions_this_month,
            adopciones_anio_actual: s.adoptions_this_year,
            promedio_dias_adopcion: s.average_days_to_adoption,
            especies_mas_adoptadas: breakdown(s.species_ranking),
            refugios_mas_adopciones: breakdown(s.shelter_ranking),
            tendencia_mensual: s
                .monthly_trend
                .into_iter()
                .map(MonthlyAdoptionsDto::from)
                .collect(),
        }
    }
}
