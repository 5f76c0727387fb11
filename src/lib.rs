//! Conversion between the Gregorian and the tabular Islamic (Hijri) calendar,
//! and month grids for rendering a Hijri calendar.
//!
//! Both calendars convert through an Astronomical Julian Day (AJD), a
//! continuous day count with the fractional part holding the time of day.
//! The Hijri side uses the fixed 30-year cycle with 11 Kabisa (leap) years.
//!
//! ```
//! use hijri_calendar::{GregorianDate, HijriCalendar, HijriDate, WeekStart};
//!
//! let hijri = HijriDate::from_gregorian(&GregorianDate::new(2011, 2, 25));
//! assert_eq!(hijri, HijriDate::new(1432, 3, 20));
//!
//! let calendar = HijriCalendar::new(1432, 3, WeekStart::Sunday)?;
//! assert!(calendar.weeks().iter().all(|week| week.len() == 7));
//! # Ok::<(), hijri_calendar::CalendarError>(())
//! ```

pub mod astronomical;
mod bounds;
mod calendar;
mod consts;
mod gregorian;
mod hijri;
pub mod miqaat;
mod parse;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use bounds::CalendarBounds;
pub use calendar::{CalendarDay, Cell, HijriCalendar, Week};
pub use consts::*;
pub use gregorian::GregorianDate;
pub use hijri::HijriDate;
pub use types::{MonthNameStyle, WeekStart};

/// Error type for every fallible operation of the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year outside the calendar's configured range.
    #[error("Year {year} is outside the calendar range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Month index outside 0-11.
    #[error("Invalid month index: {0} (must be 0-11)")]
    InvalidMonth(u8),

    /// Day outside the length of its month.
    #[error("Invalid day {day} for month index {month} of {year}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    #[error("Invalid time of day: {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
    InvalidTime {
        hour:        u8,
        minute:      u8,
        second:      u8,
        millisecond: u16,
    },

    /// Lower year bound after the upper one.
    #[error("Invalid year bounds: min {min} is after max {max}")]
    InvalidBounds { min: i32, max: i32 },

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,
}
