//! Service renewal period calculation.
//!
//! When a production entity renews its package bundle, the next billing
//! period is derived from the current subscription's expiry date. The
//! arithmetic lives here, separate from any screen wiring, so it can be
//! tested on its own.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};

/// Display format used everywhere dates are shown to the user.
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// The billing period that a renewal order covers.
///
/// Computed once when the renewal view opens and treated as read-only
/// display data from then on; it is consumed to pre-fill the confirmation
/// screen before an order is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalPeriod {
    /// First day of the renewed term, the day after the current expiry.
    pub new_start: NaiveDate,
    /// Last day of the renewed term, inclusive.
    pub new_end: NaiveDate,
}

/// Computes the renewal period following `current_end`.
///
/// The new term starts on the calendar day immediately after `current_end`
/// and runs for one year inclusive: the end date is the day before the
/// first anniversary of the start date.
///
/// Leap-day policy: when the start date is Feb 29, its anniversary does not
/// exist in the following year; the candidate is clamped to Feb 28 before
/// the final day is subtracted. The resulting interval is always exactly
/// 364 or 365 days, depending on leap-year placement.
///
/// The input is trusted to be a sane calendar date; there are no error
/// conditions and no side effects.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use origintrace::renewal::compute_renewal_period;
///
/// let current_end = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let period = compute_renewal_period(current_end);
/// assert_eq!(period.new_start, NaiveDate::from_ymd_opt(2025, 7, 2).unwrap());
/// assert_eq!(period.new_end, NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
/// ```
#[must_use]
pub fn compute_renewal_period(current_end: NaiveDate) -> RenewalPeriod {
    let new_start = current_end + Duration::days(1);

    let next_year = new_start.year() + 1;
    // Feb 29 is the only day without an anniversary; clamp to Feb 28.
    let candidate = new_start
        .with_year(next_year)
        .or_else(|| NaiveDate::from_ymd_opt(next_year, new_start.month(), new_start.day() - 1))
        .unwrap_or(new_start);

    RenewalPeriod { new_start, new_end: candidate - Duration::days(1) }
}

/// Formats a date as zero-padded `DD/MM/YYYY` for display.
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parses a `DD/MM/YYYY` display string back into a date.
///
/// # Errors
///
/// Returns [`PlatformError::InvalidDate`] if the string is not a valid
/// zero-padded `DD/MM/YYYY` calendar date.
pub fn parse_display_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DISPLAY_FORMAT)
        .map_err(|_| PlatformError::InvalidDate(text.to_owned()))
}

/// Serde adapter for fields carried as `DD/MM/YYYY` strings on the wire.
///
/// Used with `#[serde(with = "crate::renewal::display_date")]`.
pub mod display_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::{format_display_date, parse_display_date};

    /// Serializes a date as a `DD/MM/YYYY` string.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_display_date(*date))
    }

    /// Deserializes a date from a `DD/MM/YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error for malformed dates.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_display_date(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ========================================================================
    // Period Calculation Tests
    // ========================================================================

    #[test]
    fn test_mid_year_renewal() {
        let period = compute_renewal_period(date(2025, 7, 1));
        assert_eq!(period.new_start, date(2025, 7, 2));
        assert_eq!(period.new_end, date(2026, 7, 1));
    }

    #[test]
    fn test_year_boundary_renewal() {
        let period = compute_renewal_period(date(2025, 12, 31));
        assert_eq!(period.new_start, date(2026, 1, 1));
        assert_eq!(period.new_end, date(2026, 12, 31));
    }

    #[test]
    fn test_month_boundary_renewal() {
        let period = compute_renewal_period(date(2025, 1, 31));
        assert_eq!(period.new_start, date(2025, 2, 1));
        assert_eq!(period.new_end, date(2026, 1, 31));
    }

    #[test]
    fn test_leap_day_start_clamps_to_feb_28() {
        // 2024 is a leap year: the day after 28/02 is 29/02, whose
        // anniversary does not exist in 2025.
        let period = compute_renewal_period(date(2024, 2, 28));
        assert_eq!(period.new_start, date(2024, 2, 29));
        assert_eq!(period.new_end, date(2025, 2, 27));
    }

    #[test]
    fn test_period_spanning_leap_day() {
        let period = compute_renewal_period(date(2023, 12, 31));
        assert_eq!(period.new_start, date(2024, 1, 1));
        assert_eq!(period.new_end, date(2024, 12, 31));
        assert_eq!((period.new_end - period.new_start).num_days(), 365);
    }

    // ========================================================================
    // Display Formatting Tests
    // ========================================================================

    #[test]
    fn test_format_zero_padded() {
        assert_eq!(format_display_date(date(2026, 1, 2)), "02/01/2026");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_display_date("31/12/2025").unwrap(), date(2025, 12, 31));
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_date() {
        let result = parse_display_date("31/02/2025");
        assert!(matches!(result.unwrap_err(), PlatformError::InvalidDate(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_separator() {
        assert!(parse_display_date("2025-12-31").is_err());
    }

    #[test]
    fn test_display_date_serde_adapter() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wire {
            #[serde(with = "display_date")]
            end: NaiveDate,
        }

        let json = serde_json::to_string(&Wire { end: date(2025, 7, 1) }).unwrap();
        assert_eq!(json, r#"{"end":"01/07/2025"}"#);

        let parsed: Wire = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.end, date(2025, 7, 1));
    }

    // ========================================================================
    // Property Tests
    // ========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_start_is_next_calendar_day(offset in 0i64..60_000) {
            let d = date(1970, 1, 1) + Duration::days(offset);
            let period = compute_renewal_period(d);
            prop_assert_eq!(period.new_start, d + Duration::days(1));
        }

        #[test]
        fn prop_interval_is_one_year_minus_one_day(offset in 0i64..60_000) {
            let d = date(1970, 1, 1) + Duration::days(offset);
            let period = compute_renewal_period(d);
            let len = (period.new_end - period.new_start).num_days();
            prop_assert!(len == 364 || len == 365, "interval was {len} days");
        }

        #[test]
        fn prop_format_parse_roundtrip(offset in 0i64..60_000) {
            let d = date(1970, 1, 1) + Duration::days(offset);
            let parsed = parse_display_date(&format_display_date(d)).unwrap();
            prop_assert_eq!(parsed, d);
        }
    }
}
