//! Month grids for rendering a Hijri calendar.
//!
//! A grid is the month's days padded at both ends with filler days borrowed
//! from the neighbouring months, so that it splits into whole weeks. At the
//! very first and very last month of the configured [`CalendarBounds`] there
//! is no neighbour to borrow from and the padding is made of boundary
//! placeholders (`None`) instead.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{DAYS_IN_WEEK, MIN_DAY};
use crate::types::validate_month;
use crate::{CalendarBounds, CalendarError, GregorianDate, HijriDate, WeekStart};

/// A grid cell; `None` marks a boundary placeholder.
pub type Cell = Option<CalendarDay>;

/// One row of a month grid, always [`DAYS_IN_WEEK`] cells wide inside the bounds.
pub type Week = Vec<Cell>;

/// A single day of a month grid with both of its calendar readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    hijri:     HijriDate,
    gregorian: GregorianDate,
    ajd:       f64,
    is_filler: bool,
}

impl CalendarDay {
    pub fn new(hijri: HijriDate, is_filler: bool) -> Self {
        let ajd = hijri.to_ajd();
        Self {
            hijri,
            gregorian: GregorianDate::from_ajd(ajd),
            ajd,
            is_filler,
        }
    }

    pub const fn hijri(&self) -> HijriDate {
        self.hijri
    }

    pub const fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    pub const fn ajd(&self) -> f64 {
        self.ajd
    }

    /// True for days borrowed from the previous or next month.
    pub const fn is_filler(&self) -> bool {
        self.is_filler
    }
}

/// A Hijri month laid out in weeks.
///
/// Immutable: navigation returns a new calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendar")]
pub struct HijriCalendar {
    year:       i32,
    month:      u8,
    week_start: WeekStart,
    bounds:     CalendarBounds,
}

#[derive(Deserialize)]
struct RawCalendar {
    year:       i32,
    month:      u8,
    week_start: WeekStart,
    #[serde(default)]
    bounds:     CalendarBounds,
}

impl TryFrom<RawCalendar> for HijriCalendar {
    type Error = CalendarError;

    fn try_from(raw: RawCalendar) -> Result<Self, Self::Error> {
        Self::with_bounds(raw.year, raw.month, raw.week_start, raw.bounds)
    }
}

impl HijriCalendar {
    /// Creates a calendar within the default 1000..=3000 year range.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` or `CalendarError::InvalidMonth`.
    pub fn new(year: i32, month: u8, week_start: WeekStart) -> Result<Self, CalendarError> {
        Self::with_bounds(year, month, week_start, CalendarBounds::default())
    }

    /// Creates a calendar within custom year bounds.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if `year` is outside `bounds`,
    /// or `CalendarError::InvalidMonth` if `month` is above 11.
    pub fn with_bounds(
        year: i32,
        month: u8,
        week_start: WeekStart,
        bounds: CalendarBounds,
    ) -> Result<Self, CalendarError> {
        let validated = bounds.check(year).and_then(|_| validate_month(month));
        if let Err(err) = validated {
            debug!(year, month, %bounds, "rejected calendar: {err}");
            return Err(err);
        }
        Ok(Self {
            year,
            month,
            week_start,
            bounds,
        })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub const fn bounds(&self) -> CalendarBounds {
        self.bounds
    }

    pub const fn min_year(&self) -> i32 {
        self.bounds.min_year()
    }

    pub const fn max_year(&self) -> i32 {
        self.bounds.max_year()
    }

    pub const fn days_in_month(&self) -> u8 {
        HijriDate::days_in_month(self.year, self.month)
    }

    /// Column of `day` of this month, 0 being the configured week start.
    pub fn day_of_week(&self, day: u8) -> u8 {
        HijriDate::new(self.year, self.month, day).day_of_week(self.week_start)
    }

    /// Every day of this month, none of them fillers.
    pub fn days(&self) -> Vec<CalendarDay> {
        (MIN_DAY..=self.days_in_month())
            .map(|day| CalendarDay::new(HijriDate::new(self.year, self.month, day), false))
            .collect()
    }

    /// Padding before day 1: the last days of the previous month, in order,
    /// up to the start of the week.
    ///
    /// At the first month of `min_year` this is `6 - day_of_week(1)`
    /// boundary placeholders instead.
    pub fn previous_days(&self) -> Vec<Cell> {
        let start = self.day_of_week(MIN_DAY);
        let (year, month) = self.bounds.previous_month(self.year, self.month);
        if (year, month) == (self.year, self.month) {
            return vec![None; usize::from(6 - start)];
        }

        let days_in_previous = HijriDate::days_in_month(year, month);
        (days_in_previous - start + 1..=days_in_previous)
            .map(|day| Some(CalendarDay::new(HijriDate::new(year, month, day), true)))
            .collect()
    }

    /// Padding after the last day: the first days of the next month up to
    /// the end of the week.
    ///
    /// At the last month of `max_year` this is boundary placeholders instead.
    pub fn next_days(&self) -> Vec<Cell> {
        let end = self.day_of_week(self.days_in_month());
        let (year, month) = self.bounds.next_month(self.year, self.month);
        if (year, month) == (self.year, self.month) {
            return vec![None; usize::from(6 - end)];
        }

        (MIN_DAY..=6 - end)
            .map(|day| Some(CalendarDay::new(HijriDate::new(year, month, day), true)))
            .collect()
    }

    /// The padded month split into rows of seven cells.
    pub fn weeks(&self) -> Vec<Week> {
        let cells: Vec<Cell> = self
            .previous_days()
            .into_iter()
            .chain(self.days().into_iter().map(Some))
            .chain(self.next_days())
            .collect();

        let weeks: Vec<Week> = cells.chunks(DAYS_IN_WEEK).map(<[Cell]>::to_vec).collect();
        trace!(year = self.year, month = self.month, rows = weeks.len(), "built month grid");
        weeks
    }

    pub fn previous_month(&self) -> Self {
        let (year, month) = self.bounds.previous_month(self.year, self.month);
        Self {
            year,
            month,
            ..*self
        }
    }

    pub fn next_month(&self) -> Self {
        let (year, month) = self.bounds.next_month(self.year, self.month);
        Self {
            year,
            month,
            ..*self
        }
    }

    pub fn previous_year(&self) -> Self {
        Self {
            year: self.bounds.previous_year(self.year),
            ..*self
        }
    }

    pub fn next_year(&self) -> Self {
        Self {
            year: self.bounds.next_year(self.year),
            ..*self
        }
    }
}
