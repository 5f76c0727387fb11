//! Observances ("miqaats") attached to fixed Hijri days.
//!
//! The data is keyed by 0-based month and day of month and recurs every year,
//! optionally starting from a given year.

use serde::{Deserialize, Serialize};

use crate::HijriDate;

/// Whether an observance falls on the day itself or the night before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Day,
    Night,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Miqaat {
    pub title:       String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub phase:       Phase,
    pub priority:    u32,
    /// First Hijri year the observance applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year:        Option<i32>,
}

impl Miqaat {
    /// False if the observance only starts after `year`.
    pub fn applies_in(&self, year: i32) -> bool {
        self.year.is_none_or(|first| first <= year)
    }
}

/// All observances on one (month, date) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiqaatMonth {
    pub month:   u8,
    pub date:    u8,
    pub miqaats: Vec<Miqaat>,
}

/// Observances for `day`, in the order they appear in `entries`.
pub fn miqaats_for_day<'a>(entries: &'a [MiqaatMonth], day: &HijriDate) -> Vec<&'a Miqaat> {
    entries
        .iter()
        .filter(|entry| entry.month == day.month() && entry.date == day.day())
        .flat_map(|entry| &entry.miqaats)
        .filter(|miqaat| miqaat.applies_in(day.year()))
        .collect()
}
