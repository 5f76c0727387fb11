use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    CalendarError,
    consts::{FIRST_MONTH, LAST_MONTH, MAX_CALENDAR_YEAR, MIN_CALENDAR_YEAR},
    prelude::*,
};

/// The inclusive range of Hijri years a calendar may show.
///
/// Navigation clamps at either end instead of leaving the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{min_year}..={max_year}")]
#[serde(try_from = "RawBounds")]
pub struct CalendarBounds {
    min_year: i32,
    max_year: i32,
}

#[derive(Deserialize)]
struct RawBounds {
    min_year: i32,
    max_year: i32,
}

impl TryFrom<RawBounds> for CalendarBounds {
    type Error = CalendarError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min_year, raw.max_year)
    }
}

impl Default for CalendarBounds {
    fn default() -> Self {
        Self {
            min_year: MIN_CALENDAR_YEAR,
            max_year: MAX_CALENDAR_YEAR,
        }
    }
}

impl CalendarBounds {
    /// Creates bounds with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidBounds` if `min_year > max_year`.
    pub const fn new(min_year: i32, max_year: i32) -> Result<Self, CalendarError> {
        if min_year > max_year {
            return Err(CalendarError::InvalidBounds {
                min: min_year,
                max: max_year,
            });
        }
        Ok(Self { min_year, max_year })
    }

    pub const fn min_year(&self) -> i32 {
        self.min_year
    }

    pub const fn max_year(&self) -> i32 {
        self.max_year
    }

    pub const fn contains(&self, year: i32) -> bool {
        self.min_year <= year && year <= self.max_year
    }

    /// Checks that `year` lies within the bounds.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` otherwise.
    pub const fn check(&self, year: i32) -> Result<i32, CalendarError> {
        if !self.contains(year) {
            return Err(CalendarError::YearOutOfRange {
                year,
                min: self.min_year,
                max: self.max_year,
            });
        }
        Ok(year)
    }

    /// The month before `(year, month)`, or `(year, month)` itself at the
    /// first month of `min_year`.
    pub fn previous_month(&self, year: i32, month: u8) -> (i32, u8) {
        if month > FIRST_MONTH {
            return (year, month - 1);
        }
        if year <= self.min_year {
            debug!(year, month, "previous month clamped at lower bound");
            return (year, month);
        }
        (year - 1, LAST_MONTH)
    }

    /// The month after `(year, month)`, or `(year, month)` itself at the
    /// last month of `max_year`.
    pub fn next_month(&self, year: i32, month: u8) -> (i32, u8) {
        if month < LAST_MONTH {
            return (year, month + 1);
        }
        if year >= self.max_year {
            debug!(year, month, "next month clamped at upper bound");
            return (year, month);
        }
        (year + 1, FIRST_MONTH)
    }

    pub fn previous_year(&self, year: i32) -> i32 {
        if year <= self.min_year {
            debug!(year, "previous year clamped at lower bound");
            return self.min_year;
        }
        year - 1
    }

    pub fn next_year(&self, year: i32) -> i32 {
        if year >= self.max_year {
            debug!(year, "next year clamped at upper bound");
            return self.max_year;
        }
        year + 1
    }
}
