use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::consts::{
    AVG_HIJRI_MONTH_DAYS, AVG_HIJRI_YEAR_DAYS, HIJRI_EPOCH_DAY, HIJRI_EPOCH_MONTH,
    HIJRI_EPOCH_YEAR, MS_PER_DAY,
};
use crate::types::HijriDate;

/// Midnight at the start of the Hijri epoch, 622-07-16 in the Gregorian
/// calendar.
pub(crate) fn hijri_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(HIJRI_EPOCH_YEAR, HIJRI_EPOCH_MONTH, HIJRI_EPOCH_DAY)
        .map(|date| date.and_time(NaiveTime::MIN))
        // The epoch constants form a valid civil date; this branch is unreachable.
        .unwrap_or(NaiveDateTime::MIN)
}

/// Conversion seam between Gregorian instants and Hijri calendar dates.
///
/// The age-breakdown logic only ever goes through this trait, so the
/// fixed-average arithmetic of [`AverageHijriConverter`] can be swapped for
/// an exact tabular calendar (e.g. Umm al-Qura) without touching it.
pub trait CalendarConverter {
    /// Converts a Gregorian instant into a Hijri calendar date.
    fn to_hijri(&self, instant: NaiveDateTime) -> HijriDate;

    /// Converts a Hijri calendar date into a Gregorian instant.
    ///
    /// Returns `None` when the date lands outside the representable
    /// Gregorian range.
    fn from_hijri(&self, date: HijriDate) -> Option<NaiveDateTime>;
}

/// Fixed-average Hijri conversion: 354.367 days per year, 29.5 days per
/// month, anchored at the 622-07-16 epoch.
///
/// This is an approximation, not a tabular lunar calendar. Outputs are left
/// unclamped, so `month` may reach 13 and `day` may exceed the nominal
/// 29/30 cap when the averaged remainders drift. Round trips through
/// [`from_hijri`](CalendarConverter::from_hijri) land within one day of the
/// original instant, never exactly on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AverageHijriConverter;

impl CalendarConverter for AverageHijriConverter {
    fn to_hijri(&self, instant: NaiveDateTime) -> HijriDate {
        let elapsed_ms = (instant - hijri_epoch()).num_milliseconds() as f64;
        let days_diff = (elapsed_ms / MS_PER_DAY).floor();

        let year = (days_diff / AVG_HIJRI_YEAR_DAYS).floor() as i32 + 1;
        let remaining_days = days_diff % AVG_HIJRI_YEAR_DAYS;
        let month = (remaining_days / AVG_HIJRI_MONTH_DAYS).floor() as i32 + 1;
        let day = (remaining_days % AVG_HIJRI_MONTH_DAYS).floor() as i32 + 1;

        HijriDate { year, month, day }
    }

    fn from_hijri(&self, date: HijriDate) -> Option<NaiveDateTime> {
        let days_from_epoch = (f64::from(date.year) - 1.0) * AVG_HIJRI_YEAR_DAYS
            + (f64::from(date.month) - 1.0) * AVG_HIJRI_MONTH_DAYS
            + f64::from(date.day);

        // Fractional days truncate at the millisecond level. The f64→i64
        // cast saturates, and the checked add rejects instants past
        // chrono's representable range instead of panicking.
        hijri_epoch().checked_add_signed(Duration::milliseconds(
            (days_from_epoch * MS_PER_DAY) as i64,
        ))
    }
}
