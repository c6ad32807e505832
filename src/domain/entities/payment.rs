//! Payment record fetched from the payments store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::aggregation::filters::{COMPLETED_PAYMENT_STATUSES, status_in};

/// A payment made towards a donation.
///
/// Only payments whose status marks them as completed count as donations.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub amount: f64,
    pub method: Option<String>,
    pub status: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub donation_id: Option<Uuid>,
}

impl PaymentRecord {
    /// Returns true when the payment settled successfully.
    pub fn is_completed_donation(&self) -> bool {
        status_in(self.status.as_deref(), COMPLETED_PAYMENT_STATUSES)
    }

    /// Completion time when known, creation time otherwise.
    pub fn effective_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at.or(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn payment(status: Option<&str>) -> PaymentRecord {
        PaymentRecord {
            id: Uuid::new_v4(),
            amount: 10.0,
            method: Some("tarjeta".to_string()),
            status: status.map(str::to_string),
            completed_at: None,
            created_at: None,
            donation_id: None,
        }
    }

    #[test]
    fn test_completed_statuses() {
        for status in ["completado", "SUCCEEDED", "Success"] {
            assert!(payment(Some(status)).is_completed_donation(), "{status}");
        }
    }

    #[test]
    fn test_other_statuses_are_not_donations() {
        for status in ["pending", "failed", "cancelado", ""] {
            assert!(!payment(Some(status)).is_completed_donation(), "{status}");
        }
        assert!(!payment(None).is_completed_donation());
    }

    #[test]
    fn test_effective_at_prefers_completion() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let completed = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();

        let mut p = payment(Some("succeeded"));
        p.created_at = Some(created);
        assert_eq!(p.effective_at(), Some(created));

        p.completed_at = Some(completed);
        assert_eq!(p.effective_at(), Some(completed));
    }
}
