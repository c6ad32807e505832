//! Lookback window query parameter.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::config::MAX_LOOKBACK_MONTHS;
use crate::error::AppError;

/// `?meses=N` for trend endpoints.
///
/// Uses `serde_with` to parse the month count from the query string.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LookbackParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[validate(range(
        min = 1,
        max = MAX_LOOKBACK_MONTHS,
        message = "meses is outside the accepted lookback window"
    ))]
    pub meses: Option<u32>,
}

impl LookbackParams {
    /// Validated month count, or `default` when the parameter is absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `meses` is out of range.
    pub fn months_or(&self, default: u32) -> Result<u32, AppError> {
        self.validate()?;
        Ok(self.meses.unwrap_or(default))
    }
}
