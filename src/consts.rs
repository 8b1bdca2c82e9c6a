/// Mean solar year in days (1577917828 / 4320000), the traditional
/// Thandeikta value used by Myanmar calendar makers.
pub const SOLAR_YEAR: f64 = 1_577_917_828.0 / 4_320_000.0;

/// Mean synodic month in days (1577917828 / 53433336).
pub const LUNAR_MONTH: f64 = 1_577_917_828.0 / 53_433_336.0;

/// Mean-longitude epoch of the Myanmar era as a Julian day number,
/// shortly before Myanmar year 0 (638 CE).
pub const MYANMAR_EPOCH: f64 = 1_954_168.050_623;

/// Solar years between the epoch used by the watat excess computation
/// and Myanmar year 0.
pub const EPOCH_YEAR_SHIFT: i64 = 3739;

/// First Gregorian day of the British calendar reform (1752-09-14) as a
/// Julian day number. Dates before it reckon by the Julian calendar.
pub const BRITISH_GREGORIAN_START: i64 = 2_361_222;

/// Days in a common (non-watat) Myanmar year.
pub const COMMON_YEAR_DAYS: i64 = 354;

/// Days from a watat year's second full moon back to its first day.
pub const NEW_YEAR_OFFSET: i64 = 102;

/// Offset between the Myanmar era and the Buddhist (Sasana) era.
pub const SASANA_OFFSET: i64 = 1182;

/// The Unix epoch (1970-01-01T00:00:00Z) as a Julian day.
pub const UNIX_EPOCH_JDN: f64 = 2_440_587.5;

/// Maximum valid civil month (December).
pub const MAX_MONTH: u8 = 12;

/// Maximum valid civil day of month.
pub const MAX_DAY: u8 = 31;
