//! Ranked category entry shared by every breakdown.

use serde::Serialize;

use crate::domain::aggregation::CategoryCount;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCountDto {
    pub categoria: String,
    pub cantidad: u64,
    pub porcentaje: f64,
}

impl From<CategoryCount> for CategoryCountDto {
    fn from(c: CategoryCount) -> Self {
        Self {
            categoria: c.category,
            cantidad: c.count,
            porcentaje: c.percentage,
        }
    }
}

pub(crate) fn breakdown(counts: Vec<CategoryCount>) -> Vec<CategoryCountDto> {
    counts.into_iter().map(CategoryCountDto::from).collect()
}
