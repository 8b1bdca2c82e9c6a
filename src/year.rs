//! Watat determination and Myanmar year resolution.
//!
//! A Myanmar year is only well-defined relative to the nearest
//! preceding intercalary (watat) year, so resolving a year walks
//! backward to find it before deriving the year type and start day.

use crate::consts::{COMMON_YEAR_DAYS, EPOCH_YEAR_SHIFT, LUNAR_MONTH, MYANMAR_EPOCH, NEW_YEAR_OFFSET, SOLAR_YEAR};
use crate::era::Era;
use crate::types::YearType;

/// Watat decision for a single Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Watat {
    /// JDN of the year's reference full moon (second Waso full moon in
    /// a watat year).
    pub full_moon: i64,
    /// Whether the year contains an intercalary month.
    pub is_watat: bool,
}

/// Decides whether a Myanmar year is a watat year and computes its
/// reference full-moon JDN.
pub fn watat_for(year: i64) -> Watat {
    let era = Era::of(year);
    // Threshold below which the excess belongs to the previous lunation.
    let ta = (SOLAR_YEAR / 12.0 - LUNAR_MONTH) * (12 - era.watat_months) as f64;
    let mut excess = (SOLAR_YEAR * (year + EPOCH_YEAR_SHIFT) as f64) % LUNAR_MONTH;
    if excess < ta {
        excess += LUNAR_MONTH;
    }
    let full_moon = (SOLAR_YEAR * year as f64 + MYANMAR_EPOCH - excess
        + 4.5 * LUNAR_MONTH
        + era.watat_offset
        + 0.5)
        .floor() as i64;

    let raw = if era.index >= 2.0 {
        // Later eras: watat when the excess reaches the big-watat
        // threshold derived from the era's month count.
        let tw = LUNAR_MONTH - (SOLAR_YEAR / 12.0 - LUNAR_MONTH) * era.watat_months as f64;
        excess >= tw
    } else {
        // Early eras: the 19-year Metonic cycle.
        (year * 7 + 2).rem_euclid(19) / 12 != 0
    };
    Watat {
        full_moon,
        // The exception bit is the authoritative override for
        // historically anomalous years.
        is_watat: raw ^ era.flip_watat,
    }
}

/// A fully resolved Myanmar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearInfo {
    pub year_type: YearType,
    /// JDN of the year's first day (1st waxing of Tagu).
    pub first_day: i64,
    /// JDN of the year's reference full moon.
    pub full_moon: i64,
    /// Set when the gap to the prior watat year's full moon is neither
    /// 30 nor 31 days. A diagnostic for irregular historical data, not
    /// a failure.
    pub length_error: bool,
}

impl YearInfo {
    /// Resolves a Myanmar year against its nearest preceding watat year.
    ///
    /// The backward search is capped at 3 steps; watat years are never
    /// further apart than that.
    pub fn of(year: i64) -> Self {
        let current = watat_for(year);
        let mut offset = 1;
        let mut prior = watat_for(year - 1);
        while !prior.is_watat && offset < 3 {
            offset += 1;
            prior = watat_for(year - offset);
        }

        if current.is_watat {
            let gap = (current.full_moon - prior.full_moon) % COMMON_YEAR_DAYS;
            Self {
                year_type: YearType::from_code(gap / 31 + 1),
                first_day: prior.full_moon + COMMON_YEAR_DAYS * offset - NEW_YEAR_OFFSET,
                full_moon: current.full_moon,
                length_error: gap != 30 && gap != 31,
            }
        } else {
            Self {
                year_type: YearType::Common,
                first_day: prior.full_moon + COMMON_YEAR_DAYS * offset - NEW_YEAR_OFFSET,
                full_moon: prior.full_moon + COMMON_YEAR_DAYS * offset,
                length_error: false,
            }
        }
    }
}
