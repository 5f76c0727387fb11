//! Conversion between civil (Julian/Gregorian) dates and Astronomical Julian Days.
//!
//! An AJD counts days from noon, so midnight of a civil date always lands on
//! `x.5`. The Julian/Gregorian switch is handled by the correction term of
//! the forward formula and by the `2299161` branch of the inverse; the ten
//! dropped days of October 1582 are never counted explicitly.

use crate::consts::{
    GREGORIAN_CUTOVER_JDN, JULIAN_CUTOVER, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
    MILLIS_PER_SECOND,
};
use crate::GregorianDate;

/// True iff the date falls before 1582-10-05, i.e. on the Julian calendar.
pub fn is_julian_calendar_date(date: &GregorianDate) -> bool {
    (date.year(), date.month(), date.day()) < JULIAN_CUTOVER
}

/// Converts a civil date and time to an AJD.
pub fn gregorian_to_ajd(date: &GregorianDate) -> f64 {
    let mut year = f64::from(date.year());
    let mut month = f64::from(date.month()) + 1.0;
    let day = f64::from(date.day()) + date.day_fraction();

    // January and February count as months 13 and 14 of the previous year
    if month < 3.0 {
        year -= 1.0;
        month += 12.0;
    }

    let correction = if is_julian_calendar_date(date) {
        0.0
    } else {
        let century = (year / 100.0).floor();
        2.0 - century + (century / 4.0).floor()
    };

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + correction
        - 1524.5
}

/// Converts an AJD back to a civil date and time, to the nearest millisecond.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn ajd_to_gregorian(ajd: f64) -> GregorianDate {
    let shifted = ajd + 0.5;
    let mut z = shifted.floor();
    let mut millis = ((shifted - z) * MILLIS_PER_DAY).round();
    if millis >= MILLIS_PER_DAY {
        z += 1.0;
        millis = 0.0;
    }

    let a = if z < GREGORIAN_CUTOVER_JDN {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (0.25 * alpha).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 2.0 } else { e - 14.0 };
    let year = if month < 2.0 { c - 4715.0 } else { c - 4716.0 };

    let millis = millis as u32;
    let hour = millis / MILLIS_PER_HOUR;
    let minute = millis % MILLIS_PER_HOUR / MILLIS_PER_MINUTE;
    let second = millis % MILLIS_PER_MINUTE / MILLIS_PER_SECOND;
    let millisecond = millis % MILLIS_PER_SECOND;

    GregorianDate::from_parts(
        year as i32,
        month as u8,
        day as u8,
        hour as u8,
        minute as u8,
        second as u8,
        millisecond as u16,
    )
}
