/// Gregorian year of the Hijri epoch (1 Muharram 1 AH = 622-07-16 CE)
pub const HIJRI_EPOCH_YEAR: i32 = 622;
/// Gregorian month of the Hijri epoch
pub const HIJRI_EPOCH_MONTH: u32 = 7;
/// Gregorian day of the Hijri epoch
pub const HIJRI_EPOCH_DAY: u32 = 16;

/// Average length of a Hijri year in days (approximation, not tabular)
pub const AVG_HIJRI_YEAR_DAYS: f64 = 354.367;
/// Average length of a Hijri month in days (approximation)
pub const AVG_HIJRI_MONTH_DAYS: f64 = 29.5;
/// Whole-day borrow applied when a Hijri day subtraction underflows
pub const HIJRI_BORROW_DAYS: i32 = 29;

/// Months per year, both calendars
pub const MONTHS_PER_YEAR: i32 = 12;
/// Days per week
pub const DAYS_PER_WEEK: i64 = 7;
/// Hours per day
pub const HOURS_PER_DAY: i64 = 24;
/// Minutes per hour
pub const MINUTES_PER_HOUR: i64 = 60;
/// Milliseconds per day, used for floored whole-day differences
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Average solar year in days, used for the completed-years figure
pub const AVG_SOLAR_YEAR_DAYS: f64 = 365.25;
/// Average solar month in days, used for the approximate-months figure
pub const AVG_SOLAR_MONTH_DAYS: f64 = 30.44;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// chrono format string for Gregorian birth-date input
pub const GREGORIAN_DATE_FORMAT: &str = "%Y-%m-%d";

/// Hijri month names, 1-indexed via `HijriDate::month_name`
pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];
