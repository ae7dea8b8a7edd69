use chrono::{DateTime, Utc};

/// Test de chevauchement demi-ouvert : [a_start, a_end) ∩ [b_start, b_end) ≠ ∅.
pub(super) fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}
