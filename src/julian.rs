//! Conversion between Julian day numbers and civil dates.
//!
//! Supports three reckonings: the proleptic Gregorian and Julian
//! calendars, and the hybrid British calendar that switched from Julian
//! to Gregorian on 1752-09-14 (JDN 2361222). A Julian day starts at
//! noon UTC; the fractional part carries the time of day.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::consts::{BRITISH_GREGORIAN_START, MAX_DAY, MAX_MONTH, UNIX_EPOCH_JDN};
use crate::prelude::*;
use crate::types::CalendarKind;

/// Error type for civil-date and JDN validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    #[error("invalid month: {0} (must be 1-{MAX_MONTH})")]
    InvalidMonth(u8),

    #[error("invalid day: {0} (must be 1-{MAX_DAY})")]
    InvalidDay(u8),

    #[error("invalid time of day: {hour:02}:{minute:02}:{second}")]
    InvalidTime { hour: u8, minute: u8, second: f64 },

    #[error("Julian day must be finite, got {0}")]
    InvalidJdn(f64),
}

/// A civil (year, month, day, time-of-day) tuple.
///
/// The calendar reckoning is never stored here; it is an explicit
/// parameter of every conversion. Years are astronomical (1 BC is 0).
#[derive(Debug, Clone, Copy, PartialEq, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month", "day")]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl CivilDate {
    /// Creates a date at local noon, the start of the Julian day.
    ///
    /// # Errors
    /// Returns `DateError` if the month or day is out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day == 0 || day > MAX_DAY {
            return Err(DateError::InvalidDay(day));
        }
        Ok(Self {
            year,
            month,
            day,
            hour: 12,
            minute: 0,
            second: 0.0,
        })
    }

    /// Replaces the time-of-day components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTime` if any component is out of range.
    pub fn with_time(mut self, hour: u8, minute: u8, second: f64) -> Result<Self, DateError> {
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(DateError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        Ok(self)
    }
}

/// Day count shared by the Julian and Gregorian formulas, before the
/// per-calendar era correction. Returns the count and the shifted year.
fn raw_day_count(year: i64, month: i64, day: i64) -> (i64, i64) {
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let count = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4);
    (count, y)
}

/// Converts a civil date to a Julian day.
///
/// `gregorian_start` is the first Gregorian JDN of the British
/// reckoning, normally [`BRITISH_GREGORIAN_START`]. British dates that
/// fall in the reform gap (1752-09-03..13) clamp onto the switch day.
pub fn civil_to_jdn(date: &CivilDate, kind: CalendarKind, gregorian_start: i64) -> f64 {
    let (base, y) = raw_day_count(
        i64::from(date.year),
        i64::from(date.month),
        i64::from(date.day),
    );
    let gregorian = base - y.div_euclid(100) + y.div_euclid(400) - 32045;
    let julian = base - 32083;
    let jdn = match kind {
        CalendarKind::Gregorian => gregorian,
        CalendarKind::Julian => julian,
        CalendarKind::British => {
            if gregorian < gregorian_start {
                // Before the reform the Julian formula applies, except
                // inside the dropped window, which maps to the switch day.
                julian.min(gregorian_start)
            } else {
                gregorian
            }
        }
    };
    jdn as f64 + day_fraction(date.hour, date.minute, date.second)
}

/// Fraction of a Julian day for a time of day (noon is 0).
fn day_fraction(hour: u8, minute: u8, second: f64) -> f64 {
    (f64::from(hour) - 12.0) / 24.0 + f64::from(minute) / 1440.0 + second / 86400.0
}

/// Converts a Julian day to a civil date in the given reckoning.
///
/// The fractional day decomposes into hour, minute and second by
/// repeated multiply-and-floor, each stage carrying its remainder, so
/// second-level round trips are exact.
///
/// # Errors
/// Returns `DateError::InvalidJdn` for a non-finite input.
pub fn jdn_to_civil(jdn: f64, kind: CalendarKind, gregorian_start: i64) -> Result<CivilDate, DateError> {
    if !jdn.is_finite() {
        return Err(DateError::InvalidJdn(jdn));
    }
    let j = (jdn + 0.5).floor();
    let frac = jdn + 0.5 - j;
    let j = j as i64;

    let julian_branch = matches!(kind, CalendarKind::Julian)
        || (matches!(kind, CalendarKind::British) && jdn < gregorian_start as f64);
    let (year, month, day) = if julian_branch {
        let b = j + 1524;
        let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
        let f = (365.25 * c as f64).floor() as i64;
        let e = ((b - f) as f64 / 30.6001).floor() as i64;
        let m = if e > 13 { e - 13 } else { e - 1 };
        let d = b - f - (30.6001 * e as f64).floor() as i64;
        let y = if m < 3 { c - 4715 } else { c - 4716 };
        (y, m, d)
    } else {
        let j = j - 1_721_119;
        let y = (4 * j - 1).div_euclid(146_097);
        let j = 4 * j - 1 - 146_097 * y;
        let d = j.div_euclid(4);
        let j = (4 * d + 3).div_euclid(1461);
        let d = 4 * d + 3 - 1461 * j;
        let d = (d + 4).div_euclid(4);
        let m = (5 * d - 3).div_euclid(153);
        let d = 5 * d - 3 - 153 * m;
        let d = (d + 5).div_euclid(5);
        let y = 100 * y + j;
        if m < 10 {
            (y, m + 3, d)
        } else {
            (y + 1, m - 9, d)
        }
    };

    let t = frac * 24.0;
    let hour = t.floor();
    let t = (t - hour) * 60.0;
    let minute = t.floor();
    let second = (t - minute) * 60.0;

    Ok(CivilDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
        hour: hour as u8,
        minute: minute as u8,
        second,
    })
}

/// Day of week of a Julian day, with 0 = Sunday through 6 = Saturday.
pub fn weekday_index(jdn: f64) -> usize {
    let j = (jdn + 0.5).floor() as i64;
    (j + 1).rem_euclid(7) as usize
}

/// Julian day of a Unix timestamp in seconds.
pub fn jdn_from_unix(seconds: f64) -> f64 {
    UNIX_EPOCH_JDN + seconds / 86_400.0
}

/// Current wall-clock time as a Julian day (UTC).
pub fn jdn_now() -> f64 {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default();
    jdn_from_unix(seconds)
}

/// Local time zone offset from UTC in hours, east of Greenwich positive.
///
/// An environment input like [`jdn_now`]; callers shift a UTC Julian
/// day by `offset / 24` to get local civil time. Fractional-hour zones
/// (for example +5.75) come through exactly.
pub fn local_utc_offset_hours() -> f64 {
    f64::from(chrono::Local::now().offset().local_minus_utc()) / 3600.0
}

/// Shorthand for [`civil_to_jdn`] with the standard British switch day.
pub fn civil_to_jdn_default(date: &CivilDate, kind: CalendarKind) -> f64 {
    civil_to_jdn(date, kind, BRITISH_GREGORIAN_START)
}
