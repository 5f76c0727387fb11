use crate::consts::{
    CENTURY_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH,
    LAST_MONTH, LEAP_YEAR_CYCLE,
};
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The weekday shown in the first column of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    /// ISO 8601 weeks
    Monday,
}

impl WeekStart {
    /// Offset added to an AJD so that `mod 7` yields 0 on this weekday.
    ///
    /// AJDs start at noon, hence the half day.
    pub const fn ajd_offset(self) -> f64 {
        match self {
            Self::Sunday => 1.5,
            Self::Monday => 0.5,
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sunday => f.write_str("Sunday"),
            Self::Monday => f.write_str("Monday"),
        }
    }
}

/// Long ("Rabi al-Aakhar", "March") or short ("Rabi II", "Mar") month names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthNameStyle {
    #[default]
    Long,
    Short,
}

/// Looks up a 0-based month in a name table.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is past the last month.
pub(crate) fn month_name_from(
    table: &'static [&'static str; 12],
    month: u8,
) -> Result<&'static str, CalendarError> {
    table
        .get(usize::from(month))
        .copied()
        .ok_or(CalendarError::InvalidMonth(month))
}

/// Checks a 0-based month index.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` for anything above `LAST_MONTH`.
pub(crate) const fn validate_month(month: u8) -> Result<u8, CalendarError> {
    if month > LAST_MONTH {
        return Err(CalendarError::InvalidMonth(month));
    }
    Ok(month)
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Leap rule of the proleptic Julian calendar.
pub const fn is_julian_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

/// Days in a 0-based civil month, picking the Julian or Gregorian leap rule.
pub const fn civil_days_in_month(year: i32, month: u8, julian: bool) -> u8 {
    debug_assert!(month <= LAST_MONTH);

    let leap = if julian {
        is_julian_leap_year(year)
    } else {
        is_leap_year(year)
    };
    if month == FEBRUARY && leap {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}
