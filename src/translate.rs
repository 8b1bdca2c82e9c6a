//! Localization of Myanmar calendar terms.
//!
//! Three parallel term tables (English, Myanmar script, Mon script)
//! keyed by canonical English names. The tables are static and
//! read-only; every lookup is a pure projection.

use crate::lunar;
use crate::types::{Language, MoonPhase, Sabbath, YearType};
use crate::MyanmarDate;

/// One term in all supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub en: &'static str,
    pub my: &'static str,
    pub mnw: &'static str,
}

impl Term {
    /// The term in one language.
    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.en,
            Language::Myanmar => self.my,
            Language::Mon => self.mnw,
        }
    }
}

/// Traditional month names: the twelve ordinary months plus the two
/// Waso names used in watat years.
pub static MONTHS: [Term; 14] = [
    Term { en: "Tagu", my: "တန်ခူး", mnw: "ဂိတုစဲ" },
    Term { en: "Kason", my: "ကဆုန်", mnw: "ဂိတုပသာ်" },
    Term { en: "Nayon", my: "နယုန်", mnw: "ဂိတုဇ်ှေ" },
    Term { en: "Waso", my: "ဝါဆို", mnw: "ဂိတုဒ္ဂိုန်" },
    Term { en: "Wagaung", my: "ဝါခေါင်", mnw: "ဂိတုခ္ဍဲသဳ" },
    Term { en: "Tawthalin", my: "တော်သလင်း", mnw: "ဂိတုဘတ်" },
    Term { en: "Thadingyut", my: "သီတင်းကျွတ်", mnw: "ဂိတုဝှ်" },
    Term { en: "Tazaungmon", my: "တန်ဆောင်မုန်း", mnw: "ဂိတုက္ထိုန်" },
    Term { en: "Nadaw", my: "နတ်တော်", mnw: "ဂိတုမြေက္ကသဵု" },
    Term { en: "Pyatho", my: "ပြာသို", mnw: "ဂိတုပှော်" },
    Term { en: "Tabodwe", my: "တပို့တွဲ", mnw: "ဂိတုမာ်" },
    Term { en: "Tabaung", my: "တပေါင်း", mnw: "ဂိတုဖဝ်ရဂိုန်" },
    Term { en: "First Waso", my: "ပဝါဆို", mnw: "ဂိတုပ-ဒ္ဂိုန်" },
    Term { en: "Second Waso", my: "ဒုဝါဆို", mnw: "ဒုဂိတုဒ္ဂိုန်" },
];

pub static WEEKDAYS: [Term; 7] = [
    Term { en: "Sunday", my: "တနင်္ဂနွေ", mnw: "တ္ၚဲအဒိုတ်" },
    Term { en: "Monday", my: "တနင်္လာ", mnw: "တ္ၚဲစန်" },
    Term { en: "Tuesday", my: "အင်္ဂါ", mnw: "တ္ၚဲအင္ၚာ" },
    Term { en: "Wednesday", my: "ဗုဒ္ဓဟူး", mnw: "တ္ၚဲဗုဒ္ဓဝါ" },
    Term { en: "Thursday", my: "ကြာသပတေး", mnw: "တ္ၚဲဗြဴဗတိ" },
    Term { en: "Friday", my: "သောကြာ", mnw: "တ္ၚဲသိုက်" },
    Term { en: "Saturday", my: "စနေ", mnw: "တ္ၚဲသ္ၚိသဝ်" },
];

pub static MOON_PHASES: [Term; 4] = [
    Term { en: "Waxing", my: "လဆန်း", mnw: "မံက်" },
    Term { en: "Full Moon", my: "လပြည့်", mnw: "ပေၚ်" },
    Term { en: "Waning", my: "လဆုတ်", mnw: "စွေက်" },
    Term { en: "New Moon", my: "လကွယ်", mnw: "အိုတ်" },
];

/// Calendar terms, indexed by [`CalendarTerm`].
pub static TERMS: [Term; 4] = [
    Term { en: "Sabbath", my: "ဥပုသ်", mnw: "ဥပုသ်" },
    Term { en: "Sabbath Eve", my: "အဖိတ်", mnw: "အဖိတ်" },
    Term { en: "Myanmar Year", my: "မြန်မာနှစ်", mnw: "သက္ကရာဇ်ဍုၚ်" },
    Term { en: "Sasana Year", my: "သာသနာနှစ်", mnw: "သက္ကရာဇ်သာသနာ" },
];

/// Keys into the [`TERMS`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarTerm {
    Sabbath,
    SabbathEve,
    MyanmarYear,
    SasanaYear,
}

/// English keys by raw month index. Late Tagu and Late Kason have no
/// traditional translation and render in English in every language.
static MONTH_KEYS: [&str; 15] = [
    "First Waso",
    "Tagu",
    "Kason",
    "Nayon",
    "Waso",
    "Wagaung",
    "Tawthalin",
    "Thadingyut",
    "Tazaungmon",
    "Nadaw",
    "Pyatho",
    "Tabodwe",
    "Tabaung",
    "Late Tagu",
    "Late Kason",
];

/// Canonical English key for a raw month index. Waso in a watat year is
/// the intercalated Second Waso.
pub fn month_key(month: i64, year_type: YearType) -> &'static str {
    if month == 4 && year_type.is_watat() {
        return "Second Waso";
    }
    MONTH_KEYS
        .get(usize::try_from(month).unwrap_or(usize::MAX))
        .copied()
        .unwrap_or("Tagu")
}

/// Localized month name for a raw month index, falling back to the
/// English key when no translation exists.
pub fn month_name(month: i64, year_type: YearType, language: Language) -> &'static str {
    let key = month_key(month, year_type);
    MONTHS
        .iter()
        .find(|t| t.en == key)
        .map_or(key, |t| t.get(language))
}

/// Localized weekday name for an index with 0 = Sunday.
pub fn weekday_name(weekday: usize, language: Language) -> &'static str {
    WEEKDAYS[weekday % 7].get(language)
}

/// Localized moon-phase name.
pub fn moon_phase_name(phase: MoonPhase, language: Language) -> &'static str {
    MOON_PHASES[phase.index()].get(language)
}

/// Localized calendar term.
pub fn term_name(term: CalendarTerm, language: Language) -> &'static str {
    let index = match term {
        CalendarTerm::Sabbath => 0,
        CalendarTerm::SabbathEve => 1,
        CalendarTerm::MyanmarYear => 2,
        CalendarTerm::SasanaYear => 3,
    };
    TERMS[index].get(language)
}

/// Formats a number with the digit glyphs of the target script.
///
/// Myanmar and Mon both use the Myanmar digits U+1040..U+1049.
pub fn localized_digits(value: i64, language: Language) -> String {
    const DIGITS: [char; 10] = ['၀', '၁', '၂', '၃', '၄', '၅', '၆', '၇', '၈', '၉'];
    let plain = value.to_string();
    match language {
        Language::English => plain,
        Language::Myanmar | Language::Mon => plain
            .chars()
            .map(|c| c.to_digit(10).map_or(c, |d| DIGITS[d as usize]))
            .collect(),
    }
}

/// A Myanmar date projected into display terms for one language.
///
/// This is the surface the presentation layer consumes: localized month
/// and phase-or-sabbath labels plus the raw fields for further
/// computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedDay {
    /// Localized traditional month name.
    pub month: &'static str,
    /// Localized moon-phase name.
    pub moon_phase: &'static str,
    /// Day number within the waxing or waning half (1..=15).
    pub moon_day: u8,
    pub is_sabbath: bool,
    pub is_sabbath_eve: bool,
    /// Localized sabbath or sabbath-eve term, when either applies.
    pub sabbath_term: Option<&'static str>,
    /// Diagnostic: the resolved year had an irregular inter-watat gap.
    pub length_anomaly: bool,
    /// The underlying date, passed through for era computations.
    pub date: MyanmarDate,
}

/// Projects a Myanmar date into localized display terms.
pub fn localize(date: &MyanmarDate, language: Language) -> LocalizedDay {
    let status = date.sabbath();
    let sabbath_term = match status {
        Sabbath::Sabbath => Some(term_name(CalendarTerm::Sabbath, language)),
        Sabbath::Eve => Some(term_name(CalendarTerm::SabbathEve, language)),
        Sabbath::None => None,
    };
    LocalizedDay {
        month: month_name(i64::from(date.month), date.year_type, language),
        moon_phase: moon_phase_name(date.moon_phase(), language),
        moon_day: lunar::moon_day(i64::from(date.day)) as u8,
        is_sabbath: status.is_sabbath(),
        is_sabbath_eve: status.is_eve(),
        sabbath_term,
        length_anomaly: date.year_info().length_error,
        date: *date,
    }
}
