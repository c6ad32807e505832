//! Month-by-month activity across adoptions, publications and donations.
//!
//! The three sources are fetched concurrently. A source that cannot be
//! listed is logged and contributes zero to every month; the statistic
//! itself never fails.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::domain::aggregation::{lookback_cutoff, period_key, round2};
use crate::domain::stores::{AdoptionStore, PaymentStore, PublicationStore, RecordStores};
use crate::error::StoreError;

/// Activity recorded in one `YYYY-MM` period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyActivity {
    pub period: String,
    pub adoptions: u64,
    pub publications: u64,
    pub donations: u64,
    pub donated_amount: f64,
}

/// Service merging adoptions, publications and completed donations into
/// per-month activity.
pub struct ActivityService {
    adoptions: Arc<dyn AdoptionStore>,
    publications: Arc<dyn PublicationStore>,
    payments: Arc<dyn PaymentStore>,
}

impl ActivityService {
    /// Creates a new activity service.
    pub fn new(stores: &RecordStores) -> Self {
        Self {
            adoptions: stores.adoptions.clone(),
            publications: stores.publications.clone(),
            payments: stores.payments.clone(),
        }
    }

    /// Activity per month over the last `months` lookback months.
    pub async fn monthly_activity(&self, months: u32) -> Vec<MonthlyActivity> {
        self.monthly_activity_at(months, Utc::now()).await
    }

    /// [`Self::monthly_activity`] evaluated at a fixed instant.
    pub async fn monthly_activity_at(
        &self,
        months: u32,
        now: DateTime<Utc>,
    ) -> Vec<MonthlyActivity> {
        let cutoff = lookback_cutoff(now, months);

        let (adoptions, publications, payments) = tokio::join!(
            self.adoptions.list_adoptions(),
            self.publications.list_publications(),
            self.payments.list_payments(),
        );

        let mut periods: BTreeMap<String, MonthlyActivity> = BTreeMap::new();

        for adoption in settle("adoptions", adoptions) {
            if !adoption.is_countable() {
                continue;
            }
            if let Some(month) = month_of(&mut periods, adoption.adopted_at, cutoff) {
                month.adoptions += 1;
            }
        }

        for publication in settle("publications", publications) {
            if let Some(month) = month_of(&mut periods, publication.published_at, cutoff) {
                month.publications += 1;
            }
        }

        for payment in settle("payments", payments) {
            if !payment.is_completed_donation() {
                continue;
            }
            if let Some(month) = month_of(&mut periods, payment.effective_at(), cutoff) {
                month.donations += 1;
                month.donated_amount += payment.amount;
            }
        }

        periods
            .into_values()
            .map(|mut month| {
                month.donated_amount = round2(month.donated_amount);
                month
            })
            .collect()
    }
}

/// Entry for the period of `at`, or `None` when undated or before `cutoff`.
fn month_of(
    periods: &mut BTreeMap<String, MonthlyActivity>,
    at: Option<DateTime<Utc>>,
    cutoff: DateTime<Utc>,
) -> Option<&mut MonthlyActivity> {
    let at = at.filter(|at| *at >= cutoff)?;
    let period = period_key(at);

    Some(
        periods
            .entry(period.clone())
            .or_insert_with(|| MonthlyActivity {
                period,
                ..MonthlyActivity::default()
            }),
    )
}

/// Records of a source, or none if its listing failed.
fn settle<T>(source: &'static str, fetched: Result<Vec<T>, StoreError>) -> Vec<T> {
    fetched.unwrap_or_else(|e| {
        warn!(source, error = %e, "Activity source unavailable, counting it as zero");
        metrics::counter!("stats_root_fetch_failures_total", "source" => source).increment(1);
        Vec::new()
    })
}
