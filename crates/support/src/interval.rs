//! Time-interval validation.
//!
//! Checks that the span between two local date-times does not exceed a
//! maximum, measured in whole units. Amounts are truncated toward zero, so
//! 59 minutes 59 seconds is 0 hours.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use corelib::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit in which an interval is measured.
///
/// Units up to `Weeks` are fixed spans of time. `Months` and longer are
/// calendar units, counted from the date and time fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 14] = [
        TimeUnit::Nanos,
        TimeUnit::Micros,
        TimeUnit::Millis,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::HalfDays,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
        TimeUnit::Decades,
        TimeUnit::Centuries,
        TimeUnit::Millennia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Nanos => "nanos",
            TimeUnit::Micros => "micros",
            TimeUnit::Millis => "millis",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::HalfDays => "half-days",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
            TimeUnit::Decades => "decades",
            TimeUnit::Centuries => "centuries",
            TimeUnit::Millennia => "millennia",
        }
    }

    /// Number of months in one unit, for calendar units.
    pub fn months(&self) -> Option<i64> {
        match self {
            TimeUnit::Months => Some(1),
            TimeUnit::Years => Some(12),
            TimeUnit::Decades => Some(120),
            TimeUnit::Centuries => Some(1_200),
            TimeUnit::Millennia => Some(12_000),
            _ => None,
        }
    }

    /// Whole units in a fixed `span`, truncated toward zero.
    ///
    /// `None` for calendar units, whose length depends on where the span
    /// starts; use [`TimeUnit::between`] for those. Sub-microsecond units
    /// saturate at the `i64` range for spans too large to represent.
    pub fn amount(&self, span: Duration) -> Option<i64> {
        let saturated = if span < Duration::zero() { i64::MIN } else { i64::MAX };
        let amount = match self {
            TimeUnit::Nanos => span.num_nanoseconds().unwrap_or(saturated),
            TimeUnit::Micros => span.num_microseconds().unwrap_or(saturated),
            TimeUnit::Millis => span.num_milliseconds(),
            TimeUnit::Seconds => span.num_seconds(),
            TimeUnit::Minutes => span.num_minutes(),
            TimeUnit::Hours => span.num_hours(),
            TimeUnit::HalfDays => span.num_hours() / 12,
            TimeUnit::Days => span.num_days(),
            TimeUnit::Weeks => span.num_weeks(),
            TimeUnit::Months
            | TimeUnit::Years
            | TimeUnit::Decades
            | TimeUnit::Centuries
            | TimeUnit::Millennia => return None,
        };
        Some(amount)
    }

    /// Whole units elapsed from `start` to `end`; negative if `end` is earlier.
    pub fn between(&self, start: NaiveDateTime, end: NaiveDateTime) -> i64 {
        match self.months() {
            Some(per_unit) => months_between(start, end) / per_unit,
            None => self
                .amount(end.signed_duration_since(start))
                .unwrap_or_default(),
        }
    }
}

/// Whole calendar months from `start` to `end`, truncated toward zero.
///
/// A month is complete once the same day-of-month and time is reached, so
/// Jan 31 to Feb 29 is 0 months and Jan 31 to Mar 1 is 1. When the end time
/// of day falls short of the start time, the end date counts as one day
/// earlier (one day later for reversed spans).
fn months_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let start_date = start.date();
    let mut end_date = end.date();
    if end_date > start_date && end.time() < start.time() {
        end_date = end_date.pred_opt().unwrap_or(end_date);
    } else if end_date < start_date && end.time() > start.time() {
        end_date = end_date.succ_opt().unwrap_or(end_date);
    }

    // day-of-month stays below 32, so the difference of packed values divided
    // by 32 counts only completed months
    fn packed(date: NaiveDate) -> i64 {
        (i64::from(date.year()) * 12 + i64::from(date.month0())) * 32 + i64::from(date.day())
    }
    (packed(end_date) - packed(start_date)) / 32
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == wanted)
            .ok_or_else(|| Error::invalid_argument(format!("unknown time unit '{}'", s)))
    }
}

/// Validates that no more than `max_duration` whole `unit`s elapse between
/// `start` and `end`.
///
/// # Errors
///
/// `Error::InvalidArgument` if `start`, `end` or `unit` is absent, if
/// `max_duration` is not positive, or if the span exceeds `max_duration`.
/// An `end` earlier than `start` gives a negative span, which never exceeds
/// the bound.
pub fn validate_time_interval(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    max_duration: i64,
    unit: Option<TimeUnit>,
) -> Result<()> {
    let start = start.ok_or_else(|| reject("startTime cannot be null."))?;
    let end = end.ok_or_else(|| reject("endTime cannot be null."))?;
    let unit = unit.ok_or_else(|| reject("unit cannot be null."))?;
    if max_duration <= 0 {
        return Err(reject("maxDuration must be greater than 0."));
    }

    let elapsed = unit.between(start, end);
    if elapsed > max_duration {
        tracing::debug!(%start, %end, elapsed, max_duration, %unit, "interval exceeds bound");
        return Err(Error::invalid_argument(format!(
            "The time interval cannot be greater than {} {}.",
            max_duration, unit
        )));
    }

    Ok(())
}

fn reject(msg: &str) -> Error {
    tracing::debug!(reason = msg, "interval arguments rejected");
    Error::invalid_argument(msg)
}
