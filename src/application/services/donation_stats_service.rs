//! Donation totals and distributions computed from the payments store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::aggregation::{
    CategoryCount, aggregate_categories, round2, start_of_month, start_of_year,
};
use crate::domain::entities::PaymentRecord;
use crate::domain::stores::{PaymentStore, RecordStores};
use crate::error::AppError;

/// Label used for payments with no method or status.
pub const UNKNOWN_LABEL: &str = "desconocido";

/// Donation overview. Amounts are rounded to two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationSummary {
    pub total_donations: u64,
    pub total_amount: f64,
    pub average_donation: f64,
    pub min_donation: Option<f64>,
    pub max_donation: Option<f64>,
    /// Completed donations by payment method.
    pub by_method: Vec<CategoryCount>,
    /// Every payment by lower-cased status.
    pub by_status: Vec<CategoryCount>,
    pub amount_this_month: f64,
    pub amount_this_year: f64,
}

/// Service computing the donation overview from the payments store.
///
/// No reference resolution is involved: every figure comes from the
/// payment records themselves.
pub struct DonationStatsService {
    payments: Arc<dyn PaymentStore>,
}

impl DonationStatsService {
    /// Creates a new donation statistics service.
    pub fn new(stores: &RecordStores) -> Self {
        Self {
            payments: stores.payments.clone(),
        }
    }

    /// Builds the donation overview.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the payments store cannot be listed.
    pub async fn summary(&self) -> Result<DonationSummary, AppError> {
        self.summary_at(Utc::now()).await
    }

    /// [`Self::summary`] evaluated at a fixed instant.
    pub async fn summary_at(&self, now: DateTime<Utc>) -> Result<DonationSummary, AppError> {
        let payments = self.payments.list_payments().await?;

        let by_status = aggregate_categories(payments.iter().map(|p| {
            p.status
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map_or_else(|| UNKNOWN_LABEL.to_string(), str::to_lowercase)
        }));

        let donations: Vec<&PaymentRecord> = payments
            .iter()
            .filter(|p| p.is_completed_donation())
            .collect();

        debug!(
            fetched = payments.len(),
            donations = donations.len(),
            "Payments loaded"
        );

        let by_method = aggregate_categories(donations.iter().map(|p| {
            p.method
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(UNKNOWN_LABEL)
        }));

        let total_amount: f64 = donations.iter().map(|p| p.amount).sum();
        let average_donation = if donations.is_empty() {
            0.0
        } else {
            total_amount / donations.len() as f64
        };

        let min_donation = donations.iter().map(|p| p.amount).reduce(f64::min);
        let max_donation = donations.iter().map(|p| p.amount).reduce(f64::max);

        let amount_since = |start: DateTime<Utc>| -> f64 {
            donations
                .iter()
                .filter(|p| p.effective_at().is_some_and(|at| at >= start))
                .map(|p| p.amount)
                .sum()
        };

        Ok(DonationSummary {
            total_donations: donations.len() as u64,
            total_amount: round2(total_amount),
            average_donation: round2(average_donation),
            min_donation: min_donation.map(round2),
            max_donation: max_donation.map(round2),
            by_method,
            by_status,
            amount_this_month: round2(amount_since(start_of_month(now))),
            amount_this_year: round2(amount_since(start_of_year(now))),
        })
    }
}
