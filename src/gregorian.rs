use crate::astronomical::{ajd_to_gregorian, gregorian_to_ajd, is_julian_calendar_date};
use crate::consts::{
    DATE_SEPARATOR, GREGORIAN_ABBREVIATION_LEN, GREGORIAN_ERA_SUFFIX, GREGORIAN_MONTHS, MIN_DAY,
};
use crate::prelude::*;
use crate::types::{civil_days_in_month, month_name_from, validate_month, MonthNameStyle};
use crate::{parse, CalendarError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A proleptic Julian/Gregorian civil date with time of day.
///
/// Months are 0-based (January is 0). Dates before 1582-10-05 are read on the
/// Julian calendar, later ones on the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month + 1", day)]
#[serde(try_from = "RawGregorianDate")]
pub struct GregorianDate {
    year:        i32,
    month:       u8,
    day:         u8,
    hour:        u8,
    minute:      u8,
    second:      u8,
    millisecond: u16,
}

#[derive(Deserialize)]
struct RawGregorianDate {
    year:        i32,
    month:       u8,
    day:         u8,
    #[serde(default)]
    hour:        u8,
    #[serde(default)]
    minute:      u8,
    #[serde(default)]
    second:      u8,
    #[serde(default)]
    millisecond: u16,
}

impl TryFrom<RawGregorianDate> for GregorianDate {
    type Error = CalendarError;

    fn try_from(raw: RawGregorianDate) -> Result<Self, Self::Error> {
        Self::try_new(raw.year, raw.month, raw.day)?.with_time(
            raw.hour,
            raw.minute,
            raw.second,
            raw.millisecond,
        )
    }
}

impl GregorianDate {
    /// Creates a date at midnight without validating it.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }

    /// Creates a midnight date, checking the month index and the day against
    /// the month length of the calendar in force on that date.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDay`.
    pub fn try_new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        validate_month(month)?;
        let date = Self::new(year, month, day);
        let max_day = civil_days_in_month(year, month, date.is_julian());
        if day < MIN_DAY || day > max_day {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
            });
        }
        Ok(date)
    }

    /// Assembles a date and time whose components are already known to be
    /// in range.
    pub(crate) const fn from_parts(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Returns a copy of this date at the given time of day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTime` if any component is out of range.
    pub const fn with_time(
        self,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return Err(CalendarError::InvalidTime {
                hour,
                minute,
                second,
                millisecond,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            millisecond,
            ..self
        })
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

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn millisecond(&self) -> u16 {
        self.millisecond
    }

    /// Elapsed fraction of the day, in `[0, 1)`.
    pub fn day_fraction(&self) -> f64 {
        f64::from(self.hour) / 24.0
            + f64::from(self.minute) / 1_440.0
            + f64::from(self.second) / 86_400.0
            + f64::from(self.millisecond) / 86_400_000.0
    }

    /// See [`is_julian_calendar_date`].
    pub fn is_julian(&self) -> bool {
        is_julian_calendar_date(self)
    }

    /// See [`gregorian_to_ajd`].
    pub fn to_ajd(&self) -> f64 {
        gregorian_to_ajd(self)
    }

    /// See [`ajd_to_gregorian`].
    pub fn from_ajd(ajd: f64) -> Self {
        ajd_to_gregorian(ajd)
    }

    /// English month name for a 0-based month; the short style is the
    /// three-letter abbreviation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` is above 11.
    pub fn month_name(month: u8, style: MonthNameStyle) -> Result<&'static str, CalendarError> {
        let name = month_name_from(&GREGORIAN_MONTHS, month)?;
        Ok(match style {
            MonthNameStyle::Long => name,
            MonthNameStyle::Short => &name[..GREGORIAN_ABBREVIATION_LEN],
        })
    }

    /// Formats as e.g. `25 March 2011 AD`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for an out-of-range month.
    pub fn long_format(&self) -> Result<String, CalendarError> {
        let name = Self::month_name(self.month, MonthNameStyle::Long)?;
        Ok(format!(
            "{} {} {} {}",
            self.day, name, self.year, GREGORIAN_ERA_SUFFIX
        ))
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD` with a 1-based month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse::iso_components(s, DATE_SEPARATOR)?;
        Self::try_new(year, month, day)
    }
}
