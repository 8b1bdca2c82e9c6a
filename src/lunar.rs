//! Month, moon-phase and observance arithmetic for Myanmar dates.
//!
//! Months are addressed by the raw index the year arithmetic produces:
//! 0 = First Waso, 1..=12 = Tagu through Tabaung, 13 = Late Tagu,
//! 14 = Late Kason. Nayon is index 3 and Waso index 4; in a watat year
//! index 4 is the intercalated Second Waso.

use crate::consts::SASANA_OFFSET;
use crate::types::{MoonPhase, Sabbath, SasanaRule, YearType};

/// Length in days of a Myanmar month.
///
/// Months alternate 29/30 days; Nayon gains one day in a big watat
/// year, which is what makes the intercalary month 31 days long in the
/// traditional counting.
pub fn month_length(month: i64, year_type: YearType) -> i64 {
    let mut length = 30 - month % 2;
    if month == 3 {
        length += year_type.code() / 2;
    }
    length
}

/// Moon phase of a day of month.
///
/// Day 15 of a 30-day month (or the month-length day of a 29-day one)
/// partitions as full moon; the last day is the new moon.
pub fn moon_phase(day: i64, month: i64, year_type: YearType) -> MoonPhase {
    let length = month_length(month, year_type);
    MoonPhase::from_code((day + 1) / 16 + day / 16 + day / length)
}

/// Moon-phase day number (1..=15 within the waxing or waning half).
pub fn moon_day(day: i64) -> i64 {
    day - 15 * (day / 16)
}

/// Buddhist observance status of a day of month.
pub fn sabbath(day: i64, month: i64, year_type: YearType) -> Sabbath {
    let length = month_length(month, year_type);
    if day == 8 || day == 15 || day == 23 || day == length {
        Sabbath::Sabbath
    } else if day == 7 || day == 14 || day == 22 || day == length - 1 {
        Sabbath::Eve
    } else {
        Sabbath::None
    }
}

/// Buddhist (Sasana) era year for a Myanmar date.
///
/// The rollover nudges under [`SasanaRule::YearEnd`] and
/// [`SasanaRule::YearStart`] are intentionally asymmetric; they
/// reproduce the reference almanac arithmetic bit for bit.
pub fn sasana_year(year: i64, month: i64, day: i64, rule: SasanaRule) -> i64 {
    let offset = match rule {
        SasanaRule::Standard => SASANA_OFFSET,
        SasanaRule::YearEnd => {
            if month >= 13 {
                SASANA_OFFSET + 1
            } else {
                SASANA_OFFSET
            }
        }
        SasanaRule::YearStart => {
            if month == 1 || (month == 2 && day < 15) {
                SASANA_OFFSET - 1
            } else {
                SASANA_OFFSET
            }
        }
    };
    year + offset
}
