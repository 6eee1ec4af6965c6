//! Dual-calendar age computation.
//!
//! Given a birth date entered in either the Gregorian or a pseudo-Hijri
//! calendar, produces two parallel age breakdowns: an exact Gregorian one
//! (calendar-carry subtraction with true month lengths) and an approximate
//! Hijri one (fixed average month/year lengths). The Hijri side is a
//! deliberate approximation carried over from the original design, isolated
//! behind the [`CalendarConverter`] trait so an exact tabular calendar can
//! be substituted later.

mod age;
mod consts;
mod convert;
mod prelude;
mod types;

pub use age::{gregorian_age, hijri_age};
pub use consts::*;
pub use convert::{AverageHijriConverter, CalendarConverter};
pub use types::{days_in_month, is_leap_year, AgeResult, GregorianAge, HijriAge, HijriDate};

use crate::prelude::*;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;

/// Which calendar a user-entered birth date is expressed in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    #[default]
    #[display(fmt = "gregorian")]
    Gregorian,
    #[display(fmt = "hijri")]
    Hijri,
}

impl FromStr for CalendarSystem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" => Ok(Self::Gregorian),
            "hijri" => Ok(Self::Hijri),
            _ => Err(ParseError::UnknownCalendar(s.to_owned())),
        }
    }
}

/// Error type for birth-date input handling.
///
/// The original behavior let malformed strings propagate as NaN arithmetic;
/// here they surface as explicit errors instead. Missing input is not an
/// error: [`AgeCalculator::calculate`] answers `Ok(None)` for blank input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Empty date string where one was required.
    #[error("Empty date string")]
    EmptyInput,

    /// Input does not have the expected `YYYY-MM-DD` shape.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Input has the right shape but is not a valid Gregorian calendar date.
    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    /// Input converts to an instant outside the representable Gregorian
    /// range (e.g. an extra-digit Hijri year).
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    /// Calendar-system tag is neither `gregorian` nor `hijri`.
    #[error("Unknown calendar system: {0}")]
    UnknownCalendar(String),
}

/// One age calculation pipeline: parse a birth date, convert calendars,
/// produce both breakdowns atomically.
///
/// The current time is always passed in explicitly ([`calculate`]) so the
/// whole pipeline stays a pure function of its inputs;
/// [`calculate_now`](Self::calculate_now) is the wall-clock convenience.
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use hijri_age::{AgeCalculator, CalendarSystem};
///
/// let now = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .unwrap()
///     .and_time(NaiveTime::MIN);
/// let calculator = AgeCalculator::new();
/// let result = calculator
///     .calculate(CalendarSystem::Gregorian, "1990-01-01", now)
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(result.gregorian_age.years, 34);
/// assert_eq!(result.gregorian_age.total_days, 12418);
/// ```
///
/// [`calculate`]: Self::calculate
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeCalculator<C = AverageHijriConverter> {
    converter: C,
}

impl AgeCalculator {
    /// Creates a calculator backed by the fixed-average Hijri conversion.
    pub const fn new() -> Self {
        Self {
            converter: AverageHijriConverter,
        }
    }
}

impl<C: CalendarConverter> AgeCalculator<C> {
    /// Creates a calculator with a custom calendar conversion.
    pub const fn with_converter(converter: C) -> Self {
        Self { converter }
    }

    /// Parses a birth-date string into a Gregorian instant.
    ///
    /// Gregorian input must be a valid `YYYY-MM-DD` calendar date. Hijri
    /// input is three plain integers split on `-` with no calendar
    /// validation (unclamped components are part of the conversion
    /// contract), mapped through the converter.
    ///
    /// # Errors
    /// Returns [`ParseError::EmptyInput`] for blank input,
    /// [`ParseError::InvalidFormat`] for the wrong shape or non-numeric
    /// components, [`ParseError::InvalidDate`] for an impossible Gregorian
    /// date, and [`ParseError::DateOutOfRange`] when a Hijri date converts
    /// past the representable Gregorian range.
    pub fn parse_birth_date(
        &self,
        system: CalendarSystem,
        input: &str,
    ) -> Result<NaiveDateTime, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        match system {
            CalendarSystem::Gregorian => NaiveDate::parse_from_str(trimmed, GREGORIAN_DATE_FORMAT)
                .map(|date| date.and_time(NaiveTime::MIN))
                .map_err(|_| ParseError::InvalidDate(trimmed.to_owned())),
            CalendarSystem::Hijri => {
                let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
                if parts.len() != 3 {
                    return Err(ParseError::InvalidFormat(trimmed.to_owned()));
                }
                let year = parse_component(parts[0])?;
                let month = parse_component(parts[1])?;
                let day = parse_component(parts[2])?;
                self.converter
                    .from_hijri(HijriDate { year, month, day })
                    .ok_or_else(|| ParseError::DateOutOfRange(trimmed.to_owned()))
            }
        }
    }

    /// Runs one full calculation against an explicit current instant.
    ///
    /// Blank input declines to calculate and answers `Ok(None)`, so callers
    /// can keep any previously displayed result. A birth date after `now`
    /// is accepted and produces negative components.
    ///
    /// # Errors
    /// Propagates [`ParseError`] from [`parse_birth_date`](Self::parse_birth_date).
    pub fn calculate(
        &self,
        system: CalendarSystem,
        input: &str,
        now: NaiveDateTime,
    ) -> Result<Option<AgeResult>, ParseError> {
        if input.trim().is_empty() {
            return Ok(None);
        }

        let birth = self.parse_birth_date(system, input)?;

        let gregorian_age = age::gregorian_age(birth, now);

        let birth_hijri = self.converter.to_hijri(birth);
        let now_hijri = self.converter.to_hijri(now);
        let hijri_age = age::hijri_age(birth_hijri, now_hijri);

        Ok(Some(AgeResult {
            gregorian_age,
            hijri_age,
        }))
    }

    /// Runs one full calculation against the local wall clock.
    ///
    /// # Errors
    /// Same as [`calculate`](Self::calculate).
    pub fn calculate_now(
        &self,
        system: CalendarSystem,
        input: &str,
    ) -> Result<Option<AgeResult>, ParseError> {
        self.calculate(system, input, Local::now().naive_local())
    }
}

fn parse_component(s: &str) -> Result<i32, ParseError> {
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}
