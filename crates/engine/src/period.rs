//! Calendar windows and delete scopes.
//!
//! Every window is an inclusive `[start, end]` pair of dates. Dates are
//! always the caller's local date; the engine never reads the clock.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::{EngineError, ResultEngine};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive date range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `[today, today]`
    pub fn today(today: NaiveDate) -> Self {
        Self::new(today, today)
    }

    /// From the most recent Monday on or before `today`, up to `today`.
    pub fn this_week(today: NaiveDate) -> Self {
        let since_monday = u64::from(today.weekday().num_days_from_monday());
        let start = today.checked_sub_days(Days::new(since_monday)).unwrap_or(today);
        Self::new(start, today)
    }

    /// From the first day of the current month up to `today`.
    pub fn this_month(today: NaiveDate) -> Self {
        let start = today.with_day(1).unwrap_or(today);
        Self::new(start, today)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> ResultEngine<NaiveDate> {
    let invalid = || EngineError::InvalidScope(format!("invalid date \"{value}\""));
    let well_formed = value.len() == 10
        && value.chars().enumerate().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// A calendar month, written `YYYY-MM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> ResultEngine<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| EngineError::InvalidScope(format!("invalid month {year:04}-{month:02}")))
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidScope(format!("invalid month \"{s}\""));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let well_formed = year.len() == 4
            && month.len() == 2
            && year.chars().chain(month.chars()).all(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(invalid());
        }

        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

/// What a delete command removes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteScope {
    All,
    Date(NaiveDate),
    Month(YearMonth),
}

impl FromStr for DeleteScope {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "all" {
            return Ok(Self::All);
        }
        match s.len() {
            10 => parse_date(s).map(Self::Date),
            7 => s.parse().map(Self::Month),
            _ => Err(EngineError::InvalidScope(format!("invalid scope \"{s}\""))),
        }
    }
}
