//! Shorthand constructors for tests.

use crate::{GregorianDate, HijriCalendar, HijriDate, WeekStart};

pub fn hijri(year: i32, month: u8, day: u8) -> HijriDate {
    HijriDate::try_new(year, month, day).unwrap()
}

pub fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
    GregorianDate::try_new(year, month, day).unwrap()
}

/// Sunday-first calendar
pub fn calendar(year: i32, month: u8) -> HijriCalendar {
    HijriCalendar::new(year, month, WeekStart::Sunday).unwrap()
}

/// Monday-first calendar
pub fn iso_calendar(year: i32, month: u8) -> HijriCalendar {
    HijriCalendar::new(year, month, WeekStart::Monday).unwrap()
}
