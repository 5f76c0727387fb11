/// Lowest Hijri year the month grid navigates to (inclusive)
pub const MIN_CALENDAR_YEAR: i32 = 1000;

/// Highest Hijri year the month grid navigates to (inclusive)
pub const MAX_CALENDAR_YEAR: i32 = 3000;

/// Number of months in both calendars
pub const MONTHS_IN_YEAR: u8 = 12;

/// Index of the first month (Moharram / January), months are 0-based
pub const FIRST_MONTH: u8 = 0;

/// Index of the last month (Zilhaj / December)
pub const LAST_MONTH: u8 = 11;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in a week, and the width of a grid row
pub const DAYS_IN_WEEK: usize = 7;

/// AJD origin of the tabular day count; 1 Moharram of year 0 falls one day later
pub const HIJRI_EPOCH_AJD: f64 = 1_948_083.5;

/// Days in one full 30-year tabular cycle
pub const DAYS_IN_30_YEAR_CYCLE: i64 = 10_631;

/// Years in one tabular cycle
pub const YEARS_IN_CYCLE: i32 = 30;

/// Residues of `year mod 30` that mark a Kabisa (leap) year
pub const KABISA_YEAR_REMAINDERS: [i32; 11] = [2, 5, 8, 10, 13, 16, 19, 21, 24, 27, 29];

/// Cumulative days at the end of each month of a common Hijri year.
/// The twelfth month is implied: 354 in a common year, 355 in a Kabisa year.
pub const DAYS_IN_YEAR: [u16; 11] = [30, 59, 89, 118, 148, 177, 207, 236, 266, 295, 325];

/// Cumulative days at the end of each year of a 30-year cycle
pub const DAYS_IN_30_YEARS: [u16; 30] = [
    354, 708, 1063, 1417, 1771, 2126, 2480, 2834, 3189, 3543, //
    3898, 4252, 4606, 4961, 5315, 5669, 6024, 6378, 6732, 7087, //
    7441, 7796, 8150, 8504, 8859, 9213, 9567, 9922, 10276, 10631,
];

/// Days in a common (non-Kabisa) Hijri year
pub const DAYS_IN_COMMON_YEAR: u16 = 354;

/// Days in the shorter, odd-indexed Hijri months
pub const SHORT_MONTH_DAYS: u8 = 29;

/// Days in the longer, even-indexed Hijri months and in Zilhaj of a Kabisa year
pub const LONG_MONTH_DAYS: u8 = 30;

/// Julian day number of 1582-10-15, the first day counted on the Gregorian calendar
pub(crate) const GREGORIAN_CUTOVER_JDN: f64 = 2_299_161.0;

/// Last Julian-calendar date as (year, 0-based month, day); anything earlier is Julian
pub(crate) const JULIAN_CUTOVER: (i32, u8, u8) = (1582, 9, 5);

/// Milliseconds in a day, used to resolve the fractional part of an AJD
pub(crate) const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub(crate) const MILLIS_PER_HOUR: u32 = 3_600_000;
pub(crate) const MILLIS_PER_MINUTE: u32 = 60_000;
pub(crate) const MILLIS_PER_SECOND: u32 = 1_000;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in each Gregorian month of a common year, 0-based
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Index of February
pub(crate) const FEBRUARY: u8 = 1;

/// Hijri month names, long form
pub const HIJRI_MONTHS: [&str; 12] = [
    "Moharram al-Haraam",
    "Safar al-Muzaffar",
    "Rabi al-Awwal",
    "Rabi al-Aakhar",
    "Jumada al-Ula",
    "Jumada al-Ukhra",
    "Rajab al-Asab",
    "Shabaan al-Karim",
    "Ramadaan al-Moazzam",
    "Shawwal al-Mukarram",
    "Zilqadah al-Haraam",
    "Zilhaj al-Haraam",
];

/// Hijri month names, short form
pub const HIJRI_MONTHS_SHORT: [&str; 12] = [
    "Moharram", "Safar", "Rabi I", "Rabi II", "Jumada I", "Jumada II", "Rajab", "Shabaan",
    "Ramadaan", "Shawwal", "Zilqadah", "Zilhaj",
];

/// Gregorian month names in English
pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Length of an abbreviated Gregorian month name
pub(crate) const GREGORIAN_ABBREVIATION_LEN: usize = 3;

/// Era suffix used when formatting Hijri dates
pub const HIJRI_ERA_SUFFIX: &str = "H";

/// Era suffix used when formatting Gregorian dates
pub const GREGORIAN_ERA_SUFFIX: &str = "AD";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
