//! Timestamp helpers. All stored timestamps are naive UTC.

use chrono::{Duration, NaiveDateTime, Utc};

use crate::server::error::Error;

/// Current time as naive UTC.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// The instant `days_old` days before `now`, used as a retention cutoff.
///
/// # Returns
/// - `Ok(NaiveDateTime)` - The cutoff timestamp
/// - `Err(Error::ParseError)` - `days_old` is out of range for a date calculation
pub fn retention_cutoff(now: NaiveDateTime, days_old: u32) -> Result<NaiveDateTime, Error> {
    now.checked_sub_signed(Duration::days(i64::from(days_old)))
        .ok_or_else(|| {
            Error::ParseError(format!(
                "Failed to calculate a cutoff {} days before {}",
                days_old, now
            ))
        })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    /// Expect the cutoff to be exactly `days_old` days earlier
    #[test]
    fn subtracts_days() {
        let now = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        let cutoff = retention_cutoff(now, 30).unwrap();

        assert_eq!(
            cutoff,
            NaiveDate::from_ymd_opt(2026, 9, 17)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        );
    }
}
