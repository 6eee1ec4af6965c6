use crate::consts::{
    AVG_HIJRI_MONTH_DAYS, AVG_HIJRI_YEAR_DAYS, AVG_SOLAR_MONTH_DAYS, AVG_SOLAR_YEAR_DAYS,
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    HIJRI_MONTH_NAMES, HOURS_PER_DAY, LEAP_YEAR_CYCLE, MONTHS_PER_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A calendar date in pseudo-Hijri terms, produced by the fixed-average
/// conversion. Components are deliberately unclamped: the averaged constants
/// can push `month` to 13 or `day` past the nominal 29/30 cap, and dates
/// before the epoch yield non-positive components. Preserving those raw
/// values is part of the conversion contract.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct HijriDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl HijriDate {
    /// Creates a date from raw components. No range validation is performed.
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Arabic name of the month, or `None` when the unclamped month number
    /// falls outside 1..=12.
    pub fn month_name(&self) -> Option<&'static str> {
        if (1..=MONTHS_PER_YEAR).contains(&self.month) {
            let index = usize::try_from(self.month - 1).ok()?;
            HIJRI_MONTH_NAMES.get(index).copied()
        } else {
            None
        }
    }
}

/// Age broken down against the Gregorian calendar.
///
/// The year/month/day components come from a calendar-carry subtraction that
/// borrows using true month lengths; the totals are derived from a single
/// floored whole-day count, so `total_hours` and `total_minutes` are exact
/// multiples rather than independently measured elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GregorianAge {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
}

impl GregorianAge {
    /// Whole weeks lived, from the day total.
    pub const fn total_weeks(&self) -> i64 {
        self.total_days / DAYS_PER_WEEK
    }

    /// Completed solar years, floored against the 365.25-day average.
    pub fn full_solar_years(&self) -> i64 {
        ((self.total_days as f64) / AVG_SOLAR_YEAR_DAYS).floor() as i64
    }

    /// Approximate months lived, floored against the 30.44-day average.
    pub fn approximate_months(&self) -> i64 {
        ((self.total_hours as f64) / (HOURS_PER_DAY as f64) / AVG_SOLAR_MONTH_DAYS).floor() as i64
    }
}

/// Age broken down against the pseudo-Hijri calendar.
///
/// `total_days` is reconstructed from the broken-down components using the
/// fixed average lengths, not measured independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HijriAge {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days: i64,
}

impl HijriAge {
    /// The reconstruction formula used for `total_days`, exposed so callers
    /// and tests can verify internal consistency.
    pub fn reconstructed_total_days(&self) -> i64 {
        (f64::from(self.years) * AVG_HIJRI_YEAR_DAYS
            + f64::from(self.months) * AVG_HIJRI_MONTH_DAYS
            + f64::from(self.days))
        .floor() as i64
    }
}

/// Combined result of a single age calculation. Produced atomically; no
/// partial state is ever exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeResult {
    pub gregorian_age: GregorianAge,
    pub hijri_age: HijriAge,
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month != 0 && month <= MONTHS_PER_YEAR as u32);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
