//! Calendar arithmetic for salary proration.
//!
//! Dates are plain calendar dates with no time zone. Elapsed periods follow
//! whole-calendar rules: a start date counts from the beginning of its day
//! and an end date up to the end of its day, so the same day one year later
//! completes exactly one year.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Days elapsed in a month from which the month counts as completed.
pub const MONTH_PROMOTION_DAYS: u32 = 15;

/// Months in a year.
pub const MONTHS_IN_YEAR: u32 = 12;

const ISO_DATE_LEN: usize = 10;

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] for any other format or for a date
/// that does not exist.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::parse_iso_date;
///
/// let date = parse_iso_date("2020-01-30").unwrap();
/// assert_eq!(date.to_string(), "2020-01-30");
/// assert!(parse_iso_date("2020-02-30").is_err());
/// assert!(parse_iso_date("2020-1-30").is_err());
/// ```
pub fn parse_iso_date(value: &str) -> EngineResult<NaiveDate> {
    // chrono accepts unpadded fields and signed years; require the fixed layout
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == ISO_DATE_LEN
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !well_formed {
        return Err(EngineError::InvalidDate {
            value: value.to_string(),
            message: "expected YYYY-MM-DD".to_string(),
        });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| EngineError::InvalidDate {
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Adds `days` calendar days to `date`, carrying across month and year ends.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{add_days, parse_iso_date};
///
/// let date = parse_iso_date("2020-01-30").unwrap();
/// assert_eq!(add_days(date, 7).unwrap().to_string(), "2020-02-06");
/// ```
pub fn add_days(date: NaiveDate, days: u32) -> EngineResult<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or(EngineError::DateOutOfRange { date, days })
}

/// Days elapsed in the month of `date`, i.e. its day of month (1-31).
pub fn days_elapsed_in_current_month(date: NaiveDate) -> u32 {
    date.day()
}

/// Completed months of the year of `date` (0-12).
///
/// The month of `date` itself counts once [`MONTH_PROMOTION_DAYS`] days of
/// it have elapsed.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{months_elapsed_in_current_year, parse_iso_date};
///
/// assert_eq!(months_elapsed_in_current_year(parse_iso_date("2020-11-04").unwrap()), 10);
/// assert_eq!(months_elapsed_in_current_year(parse_iso_date("2020-09-23").unwrap()), 9);
/// assert_eq!(months_elapsed_in_current_year(parse_iso_date("2020-12-15").unwrap()), 12);
/// ```
pub fn months_elapsed_in_current_year(date: NaiveDate) -> u32 {
    if date.day() >= MONTH_PROMOTION_DAYS {
        date.month0() + 1
    } else {
        date.month0()
    }
}

/// Whole calendar months from `start` to `end`.
///
/// A month is complete once the monthly anniversary of `start` is reached;
/// anniversaries falling on a day the month lacks clamp to its last day.
/// Returns 0 when `end` precedes `start`.
pub fn completed_months(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }

    let span = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let span = u32::try_from(span).unwrap_or(0);

    match start.checked_add_months(Months::new(span)) {
        Some(anniversary) if anniversary <= end => span,
        _ => span.saturating_sub(1),
    }
}

/// Whole calendar years from `start` to `end`.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{completed_years, parse_iso_date};
///
/// let start = parse_iso_date("2019-11-05").unwrap();
/// assert_eq!(completed_years(start, parse_iso_date("2020-11-04").unwrap()), 0);
/// assert_eq!(completed_years(start, parse_iso_date("2020-11-05").unwrap()), 1);
/// ```
pub fn completed_years(start: NaiveDate, end: NaiveDate) -> u32 {
    completed_months(start, end) / MONTHS_IN_YEAR
}

/// Months completed since the last yearly anniversary of `start` (0-11).
///
/// No partial-month promotion applies here.
pub fn completed_months_since_anniversary(start: NaiveDate, end: NaiveDate) -> u32 {
    completed_months(start, end) % MONTHS_IN_YEAR
}

/// The most recent yearly anniversary of `start` on or before `end`.
///
/// Returns `start` itself during the first year.
pub fn last_anniversary(start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let months = completed_years(start, end) * MONTHS_IN_YEAR;
    start
        .checked_add_months(Months::new(months))
        .unwrap_or(start)
}
