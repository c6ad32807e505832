//! Status predicates applied to records before any grouping or joining.

/// Adoption statuses that remove an adoption from every statistic.
pub const EXCLUDED_ADOPTION_STATUSES: &[&str] =
    &["rechazada", "rechazado", "cancelada", "cancelado"];

/// Payment statuses that mark a payment as a completed donation.
pub const COMPLETED_PAYMENT_STATUSES: &[&str] = &["completado", "succeeded", "success"];

/// Volunteer statuses counted as active.
pub const ACTIVE_VOLUNTEER_STATUSES: &[&str] = &["activo", "active"];

/// Returns true when the lower-cased status is a member of `set`.
pub fn status_in(status: Option<&str>, set: &[&str]) -> bool {
    status.is_some_and(|s| {
        let lowered = s.to_lowercase();
        set.contains(&lowered.as_str())
    })
}

/// Returns true when a record with this status takes part in aggregation.
///
/// A missing or empty status is never countable; any other status is
/// countable unless its lower-cased form is in `excluded`.
pub fn is_countable(status: Option<&str>, excluded: &[&str]) -> bool {
    match status {
        Some(s) if !s.is_empty() => !status_in(Some(s), excluded),
        _ => false,
    }
}
