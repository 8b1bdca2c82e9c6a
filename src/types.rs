use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Civil calendar reckoning used for JDN conversion.
///
/// `British` is the hybrid reckoning: Gregorian from the reform date
/// onwards, Julian before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum CalendarKind {
    #[default]
    #[display(fmt = "British")]
    British,
    #[display(fmt = "Gregorian")]
    Gregorian,
    #[display(fmt = "Julian")]
    Julian,
}

/// Myanmar year type: common, or one of the two intercalary (watat) kinds.
///
/// A little watat inserts a 30-day Second Waso; a big watat additionally
/// lengthens Nayon to 30 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub enum YearType {
    #[display(fmt = "common")]
    Common,
    #[display(fmt = "little watat")]
    LittleWatat,
    #[display(fmt = "big watat")]
    BigWatat,
}

impl YearType {
    /// Numeric code used by the calendar arithmetic (0, 1 or 2).
    #[inline]
    pub const fn code(self) -> i64 {
        match self {
            Self::Common => 0,
            Self::LittleWatat => 1,
            Self::BigWatat => 2,
        }
    }

    /// Inverse of [`YearType::code`]. Codes of 2 or more mean big watat.
    #[inline]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Common,
            1 => Self::LittleWatat,
            _ => Self::BigWatat,
        }
    }

    /// Whether the year contains an intercalary month.
    #[inline]
    pub const fn is_watat(self) -> bool {
        !matches!(self, Self::Common)
    }
}

/// Phase of the moon a Myanmar day-of-month falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum MoonPhase {
    #[display(fmt = "waxing")]
    Waxing,
    #[display(fmt = "full moon")]
    FullMoon,
    #[display(fmt = "waning")]
    Waning,
    #[display(fmt = "new moon")]
    NewMoon,
}

impl MoonPhase {
    /// Index into the moon-phase translation table (0..=3).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Waxing => 0,
            Self::FullMoon => 1,
            Self::Waning => 2,
            Self::NewMoon => 3,
        }
    }

    pub(crate) const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Waxing,
            1 => Self::FullMoon,
            2 => Self::Waning,
            _ => Self::NewMoon,
        }
    }
}

/// Buddhist observance status of a Myanmar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sabbath {
    #[default]
    None,
    Sabbath,
    Eve,
}

impl Sabbath {
    #[inline]
    pub const fn is_sabbath(self) -> bool {
        matches!(self, Self::Sabbath)
    }

    #[inline]
    pub const fn is_eve(self) -> bool {
        matches!(self, Self::Eve)
    }
}

/// Rule for converting a Myanmar year to a Buddhist (Sasana) era year.
///
/// The Sasana rollover does not coincide exactly with the Myanmar new
/// year; the two adjusted rules nudge the offset at the year boundary.
/// Their boundary semantics are carried over from the reference almanac
/// arithmetic as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SasanaRule {
    /// Fixed offset of 1182 years.
    #[default]
    Standard,
    /// One more year for the late months (raw index 13 and up) at the
    /// end of the lunar year.
    YearEnd,
    /// One less year for Tagu and the first half of Kason, before the
    /// Sasana year has rolled over.
    YearStart,
}

/// Language of a localized calendar term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[display(fmt = "English")]
    English,
    #[display(fmt = "Myanmar")]
    Myanmar,
    #[display(fmt = "Mon")]
    Mon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_type_codes_round_trip() {
        for yt in [YearType::Common, YearType::LittleWatat, YearType::BigWatat] {
            assert_eq!(yt, YearType::from_code(yt.code()));
        }
        assert_eq!(YearType::BigWatat, YearType::from_code(5));
    }

    #[test]
    fn watat_flag() {
        assert!(!YearType::Common.is_watat());
        assert!(YearType::LittleWatat.is_watat());
        assert!(YearType::BigWatat.is_watat());
    }

    #[test]
    fn moon_phase_indices() {
        assert_eq!(0, MoonPhase::Waxing.index());
        assert_eq!(1, MoonPhase::FullMoon.index());
        assert_eq!(2, MoonPhase::Waning.index());
        assert_eq!(3, MoonPhase::NewMoon.index());
    }

    #[test]
    fn sabbath_flags_disjoint() {
        assert!(Sabbath::Sabbath.is_sabbath() && !Sabbath::Sabbath.is_eve());
        assert!(Sabbath::Eve.is_eve() && !Sabbath::Eve.is_sabbath());
        assert!(!Sabbath::None.is_sabbath() && !Sabbath::None.is_eve());
    }

    #[test]
    fn display_names() {
        assert_eq!("big watat", YearType::BigWatat.to_string());
        assert_eq!("full moon", MoonPhase::FullMoon.to_string());
        assert_eq!("British", CalendarKind::British.to_string());
    }
}
