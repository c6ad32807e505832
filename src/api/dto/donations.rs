//! DTOs for donation statistics.

use serde::Serialize;

use super::category::{CategoryCountDto, breakdown};
use crate::application::services::DonationSummary;

/// Donation overview returned by `GET /api/stats/donations`.
#[derive(Debug, Clone, Serialize)]
pub struct DonationSummaryResponse {
    pub total_donaciones: u64,
    pub monto_total_donado: f64,
    pub donacion_promedio: f64,
    pub donacion_minima: Option<f64>,
    pub donacion_maxima: Option<f64>,
    pub donaciones_por_metodo: Vec<CategoryCountDto>,
    pub donaciones_por_estado: Vec<CategoryCountDto>,
    pub total_mes_actual: f64,
    pub total_anio_actual: f64,
}

impl From<DonationSummary> for DonationSummaryResponse {
    fn from(s: DonationSummary) -> Self {
        Self {
            total_donaciones: s.total_donations,
            monto_total_donado: s.total_amount,
            donacion_promedio: s.average_donation,
            donacion_minima: s.min_donation,
            donacion_maxima: s.max_donation,
            donaciones_por_metodo: breakdown(s.by_method),
            donaciones_por_estado: breakdown(s.by_status),
            total_mes_actual: s.amount_this_month,
            total_anio_actual: s.amount_this_year,
        }
    }
}
