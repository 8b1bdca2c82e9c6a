//! Myanmar (Burmese) lunisolar calendar calculations.
//!
//! Converts between Julian day numbers, civil dates (British hybrid,
//! proleptic Gregorian or Julian reckoning) and traditional Myanmar
//! dates, including watat (intercalary month) determination, moon-phase
//! day numbering, Buddhist observance days and Myanmar/Mon-script
//! localization.
//!
//! Everything is a pure function of its inputs plus static lookup
//! tables; values may be shared freely across threads.
//!
//! ```
//! use mmcal::{MoonPhase, MyanmarDate};
//!
//! let date = MyanmarDate::from_gregorian(2024, 1, 1)?;
//! assert_eq!(1385, date.year);
//! assert_eq!("Nadaw", date.month_name());
//! assert_eq!(MoonPhase::Waning, date.moon_phase());
//! assert_eq!(5, date.moon_day());
//! # Ok::<(), mmcal::DateError>(())
//! ```

mod consts;
mod era;
mod julian;
mod lunar;
mod prelude;
mod translate;
mod types;
mod year;

pub use consts::*;
pub use era::Era;
pub use julian::{
    civil_to_jdn, civil_to_jdn_default, jdn_from_unix, jdn_now, jdn_to_civil,
    local_utc_offset_hours, weekday_index, CivilDate, DateError,
};
pub use lunar::{moon_day, moon_phase, month_length, sabbath, sasana_year};
pub use translate::{
    localize, localized_digits, month_name, moon_phase_name, term_name, weekday_name,
    CalendarTerm, LocalizedDay, Term,
};
pub use types::{CalendarKind, Language, MoonPhase, Sabbath, SasanaRule, YearType};
pub use year::{watat_for, Watat, YearInfo};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A date in the traditional Myanmar calendar.
///
/// `month` is the raw index the year arithmetic produces: 0 = First
/// Waso, 1..=12 = Tagu through Tabaung, 13 = Late Tagu, 14 = Late
/// Kason. Index 4 is Waso, or Second Waso in a watat year. Derived and
/// non-owning: recomputed per conversion, never cached internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MyanmarDate {
    pub year_type: YearType,
    /// Myanmar era year.
    pub year: i32,
    /// Raw month index (0..=14).
    pub month: u8,
    /// Day of month (1..=30).
    pub day: u8,
}

impl MyanmarDate {
    /// Converts a Julian day to a Myanmar date.
    ///
    /// The Myanmar year is estimated from the mean year length and then
    /// resolved exactly; a month-cycle correction absorbs estimates
    /// that land one lunar year off.
    ///
    /// # Errors
    /// Returns `DateError::InvalidJdn` for a non-finite input.
    pub fn from_jdn(jdn: f64) -> Result<Self, DateError> {
        if !jdn.is_finite() {
            return Err(DateError::InvalidJdn(jdn));
        }
        let jdn = (jdn + 0.5).floor() as i64;
        let my = ((jdn as f64 - 0.5 - MYANMAR_EPOCH) / SOLAR_YEAR).floor() as i64;
        let info = YearInfo::of(my);

        let mut day = jdn - info.first_day + 1;
        let code = info.year_type.code();
        let big = code / 2; // 1 only in a big watat year
        let common = 1 / (code + 1); // 1 only in a common year
        let year_length = 354 + (1 - common) * 30 + big;
        let cycles = (day - 1).div_euclid(year_length);
        day -= cycles * year_length;

        // Split the day offset over the alternating 29/30-day months,
        // placing the intercalary month by the 423/512 threshold.
        let a = (day + 423).div_euclid(512);
        let month = (((day - big * a + common * a * 30) as f64 + 29.26) / 29.544).floor() as i64;
        let e = (month + 12).div_euclid(16);
        let f = (month + 11).div_euclid(16);
        let day = day - (29.544 * month as f64 - 29.26).floor() as i64 - big * e + common * f * 30;
        let month = month + f * 3 - e * 4 + 12 * cycles;

        debug_assert!((0..=14).contains(&month), "month index {month}");
        debug_assert!((1..=30).contains(&day), "day of month {day}");
        Ok(Self {
            year_type: info.year_type,
            year: my as i32,
            month: month as u8,
            day: day as u8,
        })
    }

    /// Converts a civil date in the given reckoning.
    pub fn from_civil(date: &CivilDate, kind: CalendarKind) -> Result<Self, DateError> {
        Self::from_jdn(civil_to_jdn_default(date, kind))
    }

    /// Converts a proleptic Gregorian calendar date.
    ///
    /// # Errors
    /// Returns `DateError` if the civil date is malformed.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        Self::from_civil(&CivilDate::new(year, month, day)?, CalendarKind::Gregorian)
    }

    /// Length of this date's month in days.
    pub fn month_length(&self) -> u8 {
        lunar::month_length(i64::from(self.month), self.year_type) as u8
    }

    /// Moon phase of this day.
    pub fn moon_phase(&self) -> MoonPhase {
        lunar::moon_phase(i64::from(self.day), i64::from(self.month), self.year_type)
    }

    /// Day number within the waxing or waning half (1..=15).
    pub fn moon_day(&self) -> u8 {
        lunar::moon_day(i64::from(self.day)) as u8
    }

    /// Buddhist observance status of this day.
    pub fn sabbath(&self) -> Sabbath {
        lunar::sabbath(i64::from(self.day), i64::from(self.month), self.year_type)
    }

    /// Buddhist (Sasana) era year of this date under the given rule.
    pub fn sasana_year(&self, rule: SasanaRule) -> i32 {
        lunar::sasana_year(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
            rule,
        ) as i32
    }

    /// Canonical English month name, with Waso remapped to Second Waso
    /// in watat years.
    pub fn month_name(&self) -> &'static str {
        translate::month_key(i64::from(self.month), self.year_type)
    }

    /// Resolution of this date's Myanmar year, including the
    /// inter-watat length-error diagnostic.
    pub fn year_info(&self) -> YearInfo {
        YearInfo::of(i64::from(self.year))
    }
}

impl fmt::Display for MyanmarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} of {} {} ME",
            self.moon_phase(),
            self.moon_day(),
            self.month_name(),
            self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_gregorian(y: i32, m: u8, d: u8) -> MyanmarDate {
        MyanmarDate::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn almanac_2024_new_year() {
        // Published almanac: 2024-01-01 is the 5th waning of Nadaw,
        // 1385 ME (a big watat year).
        let date = from_gregorian(2024, 1, 1);
        assert_eq!(YearType::BigWatat, date.year_type);
        assert_eq!(1385, date.year);
        assert_eq!(9, date.month);
        assert_eq!(20, date.day);
        assert_eq!("Nadaw", date.month_name());
        assert_eq!(MoonPhase::Waning, date.moon_phase());
        assert_eq!(5, date.moon_day());
        assert_eq!(Sabbath::None, date.sabbath());
        assert_eq!(29, date.month_length());
        assert_eq!(2567, date.sasana_year(SasanaRule::Standard));
    }

    #[test]
    fn conversion_golden() {
        // (gregorian, (year type code, my, mm, md))
        for ((gy, gm, gd), (myt, my, mm, md)) in [
            ((2023, 7, 3), (2, 1385, 0, 16)), // First Waso
            ((2023, 8, 1), (2, 1385, 4, 15)), // Second Waso full moon
            ((2024, 4, 16), (2, 1385, 13, 8)), // Late Tagu
            ((2024, 4, 17), (0, 1386, 1, 9)), // Tagu of the next year
            ((2024, 8, 19), (0, 1386, 5, 15)),
            ((2025, 1, 1), (0, 1386, 10, 3)),
            ((2015, 7, 1), (2, 1377, 0, 15)),
            ((2015, 8, 1), (2, 1377, 4, 16)),
            ((2000, 1, 1), (1, 1361, 9, 25)),
            ((1900, 5, 5), (0, 1262, 2, 8)),
            ((1885, 11, 28), (1, 1247, 8, 22)),
        ] {
            let date = from_gregorian(gy, gm, gd);
            assert_eq!(
                (myt, my, mm, md),
                (
                    date.year_type.code(),
                    i64::from(date.year),
                    i64::from(date.month),
                    i64::from(date.day)
                ),
                "{gy}-{gm}-{gd}"
            );
        }
    }

    #[test]
    fn british_reckoning_at_the_reform() {
        let date = MyanmarDate::from_civil(
            &CivilDate::new(1752, 9, 14).unwrap(),
            CalendarKind::British,
        )
        .unwrap();
        assert_eq!((1114, 7, 7), (date.year, i64::from(date.month), i64::from(date.day)));
        assert_eq!("Thadingyut", date.month_name());
    }

    #[test]
    fn waso_naming_follows_year_type() {
        // Second Waso appears only in watat years at the Waso slot.
        let watat = from_gregorian(2023, 8, 1);
        assert_eq!(4, watat.month);
        assert!(watat.year_type.is_watat());
        assert_eq!("Second Waso", watat.month_name());

        // 1386 is common: the same slot is plain Waso.
        let common = from_gregorian(2024, 7, 25);
        assert_eq!(1386, common.year);
        assert_eq!(YearType::Common, common.year_type);
        assert_eq!(4, common.month);
        assert_eq!("Waso", common.month_name());
    }

    #[test]
    fn new_moon_is_last_day() {
        // 2024-01-10 ends Nadaw 1385.
        let date = from_gregorian(2024, 1, 10);
        assert_eq!(date.month_length(), date.day);
        assert_eq!(MoonPhase::NewMoon, date.moon_phase());
        assert_eq!(Sabbath::Sabbath, date.sabbath());
        // The next civil day starts Pyatho.
        let next = from_gregorian(2024, 1, 11);
        assert_eq!((10, 1), (next.month, next.day));
        assert_eq!(MoonPhase::Waxing, next.moon_phase());
    }

    #[test]
    fn full_moon_sabbaths() {
        for (gy, gm, gd) in [(2023, 8, 1), (2024, 8, 19), (2015, 7, 1)] {
            let date = from_gregorian(gy, gm, gd);
            assert_eq!(MoonPhase::FullMoon, date.moon_phase(), "{gy}-{gm}-{gd}");
            assert_eq!(15, date.moon_day());
            assert_eq!(Sabbath::Sabbath, date.sabbath());
        }
        // The day before a 15th is a sabbath eve.
        let eve = from_gregorian(2023, 7, 31);
        assert_eq!(Sabbath::Eve, eve.sabbath());
    }

    #[test]
    fn consecutive_days_cover_months_exactly() {
        // Walk over a year day by day. Within a Myanmar year each
        // month runs 1..=month_length before the index moves on; at
        // the new year the count continues into Tagu mid-month, as the
        // traditional numbering does.
        let start = civil_to_jdn_default(
            &CivilDate::new(2023, 4, 1).unwrap(),
            CalendarKind::Gregorian,
        );
        let mut previous = MyanmarDate::from_jdn(start).unwrap();
        for offset in 1..=400 {
            let date = MyanmarDate::from_jdn(start + f64::from(offset)).unwrap();
            if date.year != previous.year {
                assert_eq!(previous.day + 1, date.day);
                assert_eq!(1, date.month);
            } else if date.month != previous.month {
                assert_eq!(previous.month_length(), previous.day);
                assert_eq!(1, date.day);
            } else {
                assert_eq!(previous.day + 1, date.day);
            }
            assert!(date.day >= 1 && date.day <= date.month_length());
            previous = date;
        }
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(MyanmarDate::from_gregorian(2024, 13, 1).is_err());
        assert!(MyanmarDate::from_gregorian(2024, 0, 1).is_err());
        assert!(MyanmarDate::from_jdn(f64::NAN).is_err());
    }

    #[test]
    fn conversion_is_idempotent() {
        let a = from_gregorian(2024, 1, 1);
        let b = from_gregorian(2024, 1, 1);
        assert_eq!(a, b);
        assert_eq!(a.sasana_year(SasanaRule::YearEnd), b.sasana_year(SasanaRule::YearEnd));
    }

    #[test]
    fn display_format() {
        let date = from_gregorian(2024, 1, 1);
        assert_eq!("waning 5 of Nadaw 1385 ME", date.to_string());
        let full = from_gregorian(2023, 8, 1);
        assert_eq!("full moon 15 of Second Waso 1385 ME", full.to_string());
    }

    #[test]
    fn serde_round_trip() {
        let date = from_gregorian(2024, 1, 1);
        let json = serde_json::to_string(&date).unwrap();
        let back: MyanmarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, back);
    }

    #[test]
    fn year_info_accessor() {
        let date = from_gregorian(2024, 1, 1);
        let info = date.year_info();
        assert_eq!(YearType::BigWatat, info.year_type);
        assert_eq!(2_460_025, info.first_day);
        assert!(!info.length_error);
    }
}
