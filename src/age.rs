use chrono::{Datelike, NaiveDateTime};

use crate::consts::{
    AVG_HIJRI_MONTH_DAYS, AVG_HIJRI_YEAR_DAYS, DECEMBER, HIJRI_BORROW_DAYS, HOURS_PER_DAY,
    JANUARY, MINUTES_PER_HOUR, MONTHS_PER_YEAR, MS_PER_DAY,
};
use crate::types::{days_in_month, GregorianAge, HijriAge, HijriDate};

/// Computes the Gregorian age breakdown between two instants.
///
/// Calendar-carry subtraction, not day-count division: a day underflow
/// borrows the true length of the month preceding `now` (leap-year aware),
/// then a month underflow borrows a year. The totals come from a single
/// floored whole-day difference, so `total_hours` and `total_minutes` are
/// exact multiples of it.
///
/// `birth` after `now` is not rejected; the components simply go negative.
pub fn gregorian_age(birth: NaiveDateTime, now: NaiveDateTime) -> GregorianAge {
    let mut years = now.year() - birth.year();
    let mut months = now.month() as i32 - birth.month() as i32;
    let mut days = now.day() as i32 - birth.day() as i32;

    // Fix day underflow by borrowing from the month preceding `now`.
    if days < 0 {
        months -= 1;

        let (prev_year, prev_month) = if now.month() == JANUARY {
            (now.year() - 1, DECEMBER)
        } else {
            (now.year(), now.month() - 1)
        };
        days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow by borrowing a year.
    if months < 0 {
        years -= 1;
        months += MONTHS_PER_YEAR;
    }

    let elapsed_ms = (now - birth).num_milliseconds() as f64;
    let total_days = (elapsed_ms / MS_PER_DAY).floor() as i64;
    let total_hours = total_days * HOURS_PER_DAY;
    let total_minutes = total_hours * MINUTES_PER_HOUR;

    GregorianAge {
        years,
        months,
        days,
        total_days,
        total_hours,
        total_minutes,
    }
}

/// Computes the Hijri age breakdown between two pseudo-Hijri dates.
///
/// Same carry-borrow shape as [`gregorian_age`], except the day borrow is a
/// fixed 29-day average and `total_days` is reconstructed from the
/// broken-down components via the average year/month lengths rather than
/// measured. Two layers of approximation by design; see
/// [`AverageHijriConverter`](crate::AverageHijriConverter).
pub fn hijri_age(birth: HijriDate, now: HijriDate) -> HijriAge {
    let mut years = now.year - birth.year;
    let mut months = now.month - birth.month;
    let mut days = now.day - birth.day;

    if days < 0 {
        months -= 1;
        days += HIJRI_BORROW_DAYS;
    }

    if months < 0 {
        years -= 1;
        months += MONTHS_PER_YEAR;
    }

    let total_days = (f64::from(years) * AVG_HIJRI_YEAR_DAYS
        + f64::from(months) * AVG_HIJRI_MONTH_DAYS
        + f64::from(days))
    .floor() as i64;

    HijriAge {
        years,
        months,
        days,
        total_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_exact_anniversary() {
        let age = gregorian_age(midnight(1990, 1, 1), midnight(2024, 1, 1));
        assert_eq!(age.years, 34);
        assert_eq!(age.months, 0);
        assert_eq!(age.days, 0);
        // 34 years spanning eight leap days (1992..=2020).
        assert_eq!(age.total_days, 12418);
        assert_eq!(age.total_hours, 298_032);
        assert_eq!(age.total_minutes, 17_881_920);
    }

    #[test]
    fn test_totals_are_exact_multiples() {
        let cases = [
            (midnight(1990, 1, 1), midnight(2024, 1, 1)),
            (midnight(2000, 3, 31), midnight(2024, 3, 1)),
            (midnight(1969, 7, 20), midnight(2024, 12, 31)),
            (midnight(2024, 6, 1), midnight(2024, 6, 2)),
        ];

        for (birth, now) in cases {
            let age = gregorian_age(birth, now);
            assert_eq!(age.total_hours, age.total_days * 24);
            assert_eq!(age.total_minutes, age.total_hours * 60);
        }
    }

    #[test]
    fn test_day_borrow_uses_leap_february() {
        // now is March 2024, so the borrow pulls February 2024's 29 days.
        let age = gregorian_age(midnight(2000, 3, 31), midnight(2024, 3, 1));
        assert_eq!(age.years, 23);
        assert_eq!(age.months, 11);
        // A single borrow is applied even when it leaves days negative:
        // 1 - 31 + 29 = -1. Preserved source behavior.
        assert_eq!(age.days, -1);
    }

    #[test]
    fn test_day_borrow_uses_common_february() {
        // now is March 2023, so the borrow pulls February 2023's 28 days.
        let age = gregorian_age(midnight(2000, 3, 31), midnight(2023, 3, 1));
        assert_eq!(age.years, 22);
        assert_eq!(age.months, 11);
        assert_eq!(age.days, -2);
    }

    #[test]
    fn test_day_borrow_in_january_pulls_december() {
        let age = gregorian_age(midnight(2023, 12, 20), midnight(2024, 1, 10));
        assert_eq!(age.years, 0);
        assert_eq!(age.months, 0);
        // 10 - 20 + 31 (December) = 21
        assert_eq!(age.days, 21);
        assert_eq!(age.total_days, 21);
    }

    #[test]
    fn test_month_borrow() {
        let age = gregorian_age(midnight(1990, 10, 5), midnight(2024, 3, 5));
        assert_eq!(age.years, 33);
        assert_eq!(age.months, 5);
        assert_eq!(age.days, 0);
    }

    #[test]
    fn test_birth_not_after_now_yields_non_negative_years() {
        let now = midnight(2024, 6, 15);
        let births = [
            midnight(2024, 6, 15),
            midnight(2024, 6, 14),
            midnight(2023, 7, 1),
            midnight(1900, 2, 28),
        ];
        for birth in births {
            let age = gregorian_age(birth, now);
            assert!(age.years >= 0, "birth {birth} gave years {}", age.years);
            assert!(age.total_days >= 0);
        }
    }

    #[test]
    fn test_future_birth_goes_negative() {
        let age = gregorian_age(midnight(2030, 1, 1), midnight(2024, 1, 1));
        assert_eq!(age.years, -6);
        assert!(age.total_days < 0);
        assert_eq!(age.total_hours, age.total_days * 24);
    }

    #[test]
    fn test_hijri_exact_anniversary() {
        let age = hijri_age(HijriDate::new(1410, 5, 10), HijriDate::new(1445, 5, 10));
        assert_eq!(age.years, 35);
        assert_eq!(age.months, 0);
        assert_eq!(age.days, 0);
        // 35 * 354.367 = 12402.845 → 12402
        assert_eq!(age.total_days, 12402);
    }

    #[test]
    fn test_hijri_day_borrow_is_fixed_average() {
        let age = hijri_age(HijriDate::new(1410, 5, 20), HijriDate::new(1445, 5, 10));
        // 10 - 20 + 29 = 19, with one month borrowed.
        assert_eq!(age.years, 34);
        assert_eq!(age.months, 11);
        assert_eq!(age.days, 19);
    }

    #[test]
    fn test_hijri_month_borrow() {
        let age = hijri_age(HijriDate::new(1410, 9, 1), HijriDate::new(1445, 5, 1));
        assert_eq!(age.years, 34);
        assert_eq!(age.months, 8);
        assert_eq!(age.days, 0);
    }

    #[test]
    fn test_hijri_months_stay_in_range() {
        let now = HijriDate::new(1445, 6, 12);
        for year in [1400, 1420, 1444] {
            for month in 1..=12 {
                for day in [1, 15, 29] {
                    let age = hijri_age(HijriDate::new(year, month, day), now);
                    assert!(
                        (0..=11).contains(&age.months),
                        "months out of range for {year}-{month}-{day}: {}",
                        age.months
                    );
                }
            }
        }
    }

    #[test]
    fn test_hijri_total_matches_reconstruction_formula() {
        let now = HijriDate::new(1445, 6, 12);
        for birth in [
            HijriDate::new(1400, 1, 1),
            HijriDate::new(1432, 11, 29),
            HijriDate::new(1445, 6, 11),
        ] {
            let age = hijri_age(birth, now);
            assert_eq!(age.total_days, age.reconstructed_total_days());
        }
    }
}
