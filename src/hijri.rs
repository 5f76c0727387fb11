use crate::consts::{
    DATE_SEPARATOR, DAYS_IN_30_YEARS, DAYS_IN_30_YEAR_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_YEAR,
    HIJRI_EPOCH_AJD, HIJRI_ERA_SUFFIX, HIJRI_MONTHS, HIJRI_MONTHS_SHORT, KABISA_YEAR_REMAINDERS,
    LAST_MONTH, LONG_MONTH_DAYS, MIN_DAY, SHORT_MONTH_DAYS, YEARS_IN_CYCLE,
};
use crate::prelude::*;
use crate::types::{month_name_from, validate_month, MonthNameStyle, WeekStart};
use crate::{parse, CalendarError, GregorianDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A date on the tabular Islamic calendar.
///
/// Months are 0-based (Moharram is 0). Values built with [`HijriDate::new`]
/// are not checked, and an out-of-range day simply carries through the AJD
/// arithmetic; use [`HijriDate::try_new`] for validated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month + 1", day)]
#[serde(try_from = "RawHijriDate")]
pub struct HijriDate {
    year:  i32,
    month: u8,
    day:   u8,
}

#[derive(Deserialize)]
struct RawHijriDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl TryFrom<RawHijriDate> for HijriDate {
    type Error = CalendarError;

    fn try_from(raw: RawHijriDate) -> Result<Self, Self::Error> {
        Self::try_new(raw.year, raw.month, raw.day)
    }
}

impl HijriDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(month <= LAST_MONTH);
        Self { year, month, day }
    }

    /// Creates a date, checking the month index and the day against
    /// [`HijriDate::days_in_month`].
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDay`.
    pub fn try_new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        validate_month(month)?;
        if day < MIN_DAY || day > Self::days_in_month(year, month) {
            return Err(CalendarError::InvalidDay { year, month, day });
        }
        Ok(Self::new(year, month, day))
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// True iff `year` is a leap year of the 30-year cycle.
    pub const fn is_kabisa(year: i32) -> bool {
        let remainder = year.rem_euclid(YEARS_IN_CYCLE);
        let mut i = 0;
        while i < KABISA_YEAR_REMAINDERS.len() {
            if KABISA_YEAR_REMAINDERS[i] == remainder {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Even months have 30 days and odd months 29, except that Zilhaj has 30
    /// in a Kabisa year.
    pub const fn days_in_month(year: i32, month: u8) -> u8 {
        if month % 2 == 0 || (month == LAST_MONTH && Self::is_kabisa(year)) {
            LONG_MONTH_DAYS
        } else {
            SHORT_MONTH_DAYS
        }
    }

    /// 354 days, or 355 in a Kabisa year.
    pub const fn days_in_year(year: i32) -> u16 {
        if Self::is_kabisa(year) {
            DAYS_IN_COMMON_YEAR + 1
        } else {
            DAYS_IN_COMMON_YEAR
        }
    }

    /// 1-based ordinal of this day within its year.
    pub fn day_of_year(&self) -> u16 {
        if self.month == 0 {
            u16::from(self.day)
        } else {
            DAYS_IN_YEAR[usize::from(self.month) - 1] + u16::from(self.day)
        }
    }

    /// Converts to an Astronomical Julian Day (always at midnight, `x.5`).
    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub fn to_ajd(&self) -> f64 {
        let cycles = self.year.div_euclid(YEARS_IN_CYCLE);
        let year_in_cycle = self.year.rem_euclid(YEARS_IN_CYCLE) as usize;

        let mut ajd = HIJRI_EPOCH_AJD
            + (i64::from(cycles) * DAYS_IN_30_YEAR_CYCLE) as f64
            + f64::from(self.day_of_year());
        if year_in_cycle != 0 {
            ajd += f64::from(DAYS_IN_30_YEARS[year_in_cycle - 1]);
        }
        ajd
    }

    /// Converts an Astronomical Julian Day to the Hijri date containing it.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    pub fn from_ajd(ajd: f64) -> Self {
        // 0-based offset of the day from 1 Moharram of year 0
        let offset = (ajd - HIJRI_EPOCH_AJD).floor() as i64 - 1;
        let cycles = offset.div_euclid(DAYS_IN_30_YEAR_CYCLE);
        let mut left = offset.rem_euclid(DAYS_IN_30_YEAR_CYCLE) as u16;

        let year_in_cycle = DAYS_IN_30_YEARS
            .iter()
            .position(|&days| days > left)
            .unwrap_or(DAYS_IN_30_YEARS.len() - 1);
        if year_in_cycle > 0 {
            left -= DAYS_IN_30_YEARS[year_in_cycle - 1];
        }

        // Past the last table entry means Zilhaj
        let month = DAYS_IN_YEAR
            .iter()
            .position(|&days| days > left)
            .unwrap_or(DAYS_IN_YEAR.len());
        if month > 0 {
            left -= DAYS_IN_YEAR[month - 1];
        }

        let year = cycles as i32 * YEARS_IN_CYCLE + year_in_cycle as i32;
        Self::new(year, month as u8, left as u8 + MIN_DAY)
    }

    pub fn from_gregorian(date: &GregorianDate) -> Self {
        Self::from_ajd(date.to_ajd())
    }

    pub fn to_gregorian(&self) -> GregorianDate {
        GregorianDate::from_ajd(self.to_ajd())
    }

    /// Day of the week, 0 being the configured first day.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn day_of_week(&self, week_start: WeekStart) -> u8 {
        (self.to_ajd() + week_start.ajd_offset()).rem_euclid(7.0) as u8
    }

    /// Name of a 0-based Hijri month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` is above 11.
    pub fn month_name(month: u8, style: MonthNameStyle) -> Result<&'static str, CalendarError> {
        match style {
            MonthNameStyle::Long => month_name_from(&HIJRI_MONTHS, month),
            MonthNameStyle::Short => month_name_from(&HIJRI_MONTHS_SHORT, month),
        }
    }

    /// Formats as e.g. `20 Rabi al-Aakhar 1432 H`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for an out-of-range month.
    pub fn long_format(&self) -> Result<String, CalendarError> {
        let name = Self::month_name(self.month, MonthNameStyle::Long)?;
        Ok(format!(
            "{} {} {} {}",
            self.day, name, self.year, HIJRI_ERA_SUFFIX
        ))
    }
}

impl From<GregorianDate> for HijriDate {
    fn from(date: GregorianDate) -> Self {
        Self::from_gregorian(&date)
    }
}

impl From<HijriDate> for GregorianDate {
    fn from(date: HijriDate) -> Self {
        date.to_gregorian()
    }
}

impl FromStr for HijriDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD` with a 1-based month, so `1432-04-20` is
    /// 20 Rabi al-Aakhar 1432.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse::iso_components(s, DATE_SEPARATOR)?;
        Self::try_new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{gregorian, hijri};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_is_kabisa() {
        assert!(HijriDate::is_kabisa(1434));
        assert!(!HijriDate::is_kabisa(1432));
    }

    #[test]
    fn test_eleven_kabisa_years_per_cycle() {
        let count = (1410..1440).filter(|&y| HijriDate::is_kabisa(y)).count();
        assert_eq!(count, 11);
    }

    #[test]
    fn test_days_in_month_cases() {
        struct TestCase {
            year:        i32,
            month:       u8,
            days:        u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        1432,
                month:       8,
                days:        30,
                description: "Ramadaan",
            },
            TestCase {
                year:        1432,
                month:       11,
                days:        29,
                description: "Zilhaj, common year",
            },
            TestCase {
                year:        1434,
                month:       11,
                days:        30,
                description: "Zilhaj, Kabisa year",
            },
            TestCase {
                year:        1434,
                month:       9,
                days:        29,
                description: "Shawwal, odd month",
            },
        ];

        for case in &cases {
            assert_eq!(
                HijriDate::days_in_month(case.year, case.month),
                case.days,
                "{} {}",
                case.description,
                case.year
            );
        }
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(HijriDate::days_in_year(1432), 354);
        assert_eq!(HijriDate::days_in_year(1434), 355);

        let total: u16 = (0..12).map(|m| u16::from(HijriDate::days_in_month(1434, m))).sum();
        assert_eq!(total, HijriDate::days_in_year(1434));
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(hijri(1432, 0, 10).day_of_year(), 10);
        assert_eq!(hijri(1432, 8, 10).day_of_year(), 246);
        assert_eq!(hijri(1434, 11, 30).day_of_year(), 355);
    }

    #[test]
    fn test_to_ajd_fixed_point() {
        assert_abs_diff_eq!(hijri(1432, 3, 20).to_ajd(), 2_455_645.5);
    }

    #[test]
    fn test_from_ajd_fixed_point() {
        assert_eq!(HijriDate::from_ajd(2_455_645.5), hijri(1432, 3, 20));
    }

    #[test]
    fn test_from_ajd_ignores_time_of_day() {
        assert_eq!(HijriDate::from_ajd(2_455_646.0), hijri(1432, 3, 20));
        assert_eq!(HijriDate::from_ajd(2_455_646.49), hijri(1432, 3, 20));
        assert_eq!(HijriDate::from_ajd(2_455_646.5), hijri(1432, 3, 21));
    }

    #[test]
    fn test_from_ajd_year_and_cycle_ends() {
        // Last day of a common year, of a Kabisa year, and of a whole cycle
        for date in [hijri(1432, 11, 29), hijri(1434, 11, 30), hijri(1439, 11, 30)] {
            assert_eq!(HijriDate::from_ajd(date.to_ajd()), date, "{date}");
        }

        // The day after the end of a cycle opens the next one
        let next = HijriDate::from_ajd(hijri(1439, 11, 30).to_ajd() + 1.0);
        assert_eq!(next, hijri(1440, 0, 1));
    }

    #[test]
    fn test_consecutive_days_are_one_ajd_apart() {
        let last = hijri(1432, 2, 30).to_ajd();
        let first = hijri(1432, 3, 1).to_ajd();
        assert_abs_diff_eq!(first - last, 1.0);

        let year_end = hijri(1434, 11, 30).to_ajd();
        let year_start = hijri(1435, 0, 1).to_ajd();
        assert_abs_diff_eq!(year_start - year_end, 1.0);
    }

    #[test]
    fn test_from_gregorian() {
        assert_eq!(
            HijriDate::from_gregorian(&gregorian(2011, 2, 25)),
            hijri(1432, 3, 20)
        );
        let converted: HijriDate = gregorian(2011, 2, 25).into();
        assert_eq!(converted, hijri(1432, 3, 20));
    }

    #[test]
    fn test_to_gregorian() {
        assert_eq!(hijri(1432, 3, 20).to_gregorian(), gregorian(2011, 2, 25));
        let converted: GregorianDate = hijri(1432, 3, 20).into();
        assert_eq!(converted, gregorian(2011, 2, 25));
    }

    #[test]
    fn test_day_of_week() {
        // 25 March 2011 was a Friday
        let date = hijri(1432, 3, 20);
        assert_eq!(date.day_of_week(WeekStart::Sunday), 5);
        assert_eq!(date.day_of_week(WeekStart::Monday), 4);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(
            HijriDate::month_name(3, MonthNameStyle::Long).unwrap(),
            "Rabi al-Aakhar"
        );
        assert_eq!(
            HijriDate::month_name(8, MonthNameStyle::Short).unwrap(),
            "Ramadaan"
        );
        assert!(matches!(
            HijriDate::month_name(12, MonthNameStyle::Long),
            Err(CalendarError::InvalidMonth(12))
        ));
    }

    #[test]
    fn test_long_format() {
        assert_eq!(
            hijri(1432, 3, 20).long_format().unwrap(),
            "20 Rabi al-Aakhar 1432 H"
        );
    }

    #[test]
    fn test_try_new() {
        assert!(HijriDate::try_new(1434, 11, 30).is_ok());
        assert!(matches!(
            HijriDate::try_new(1432, 11, 30),
            Err(CalendarError::InvalidDay {
                year: 1432,
                month: 11,
                day: 30
            })
        ));
        assert!(matches!(
            HijriDate::try_new(1432, 12, 1),
            Err(CalendarError::InvalidMonth(12))
        ));
        assert!(HijriDate::try_new(1432, 0, 0).is_err());
    }

    #[test]
    fn test_display_and_from_str() {
        let date = hijri(1432, 3, 20);
        assert_eq!(date.to_string(), "1432-04-20");
        assert_eq!("1432-04-20".parse::<HijriDate>().unwrap(), date);

        assert!(matches!(
            "1432-12-30".parse::<HijriDate>(),
            Err(CalendarError::InvalidDay { .. })
        ));
        assert!(matches!(
            "1432-13-01".parse::<HijriDate>(),
            Err(CalendarError::InvalidMonth(12))
        ));
    }

    #[test]
    fn test_ordering() {
        assert!(hijri(1432, 3, 20) < hijri(1432, 3, 21));
        assert!(hijri(1432, 11, 29) < hijri(1433, 0, 1));
    }

    #[test]
    fn test_serde() {
        let date = hijri(1432, 3, 20);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":1432,"month":3,"day":20}"#);

        let parsed: HijriDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<HijriDate, _> =
            serde_json::from_str(r#"{"year":1432,"month":12,"day":1}"#);
        assert!(result.is_err(), "month index 12 should be rejected");

        let result: Result<HijriDate, _> =
            serde_json::from_str(r#"{"year":1432,"month":11,"day":30}"#);
        assert!(result.is_err(), "Zilhaj 1432 has 29 days");

        let result: Result<HijriDate, _> =
            serde_json::from_str(r#"{"year":1432,"month":3,"day":0}"#);
        assert!(result.is_err(), "day 0 should be rejected");

        let parsed: HijriDate = serde_json::from_str(r#"{"year":1434,"month":11,"day":30}"#).unwrap();
        assert_eq!(parsed, hijri(1434, 11, 30));
    }
}
