//! Auto-summary cadence.
//!
//! After each insert the command layer asks whether the ledger history now
//! spans a whole number of weeks or months, counted from the first-ever
//! entry date (not from calendar boundaries).

use chrono::NaiveDate;

const DAYS_PER_WEEK: i64 = 7;
const DAYS_PER_MONTH: i64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoSummary {
    None,
    Weekly,
    Monthly,
}

impl AutoSummary {
    /// Decides which summary to push given the earliest and latest entry
    /// dates. Monthly wins when both cadences line up.
    pub fn decide(min_date: NaiveDate, max_date: NaiveDate) -> Self {
        let span_days = span_days(min_date, max_date);
        if span_days < 1 {
            return Self::None;
        }

        if span_days % DAYS_PER_MONTH == 0 {
            Self::Monthly
        } else if span_days % DAYS_PER_WEEK == 0 {
            Self::Weekly
        } else {
            Self::None
        }
    }
}

/// Inclusive day count between two dates.
pub fn span_days(min_date: NaiveDate, max_date: NaiveDate) -> i64 {
    (max_date - min_date).num_days() + 1
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;

    fn spanning(days: u64) -> AutoSummary {
        let min = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let max = min.checked_add_days(Days::new(days - 1)).unwrap();
        AutoSummary::decide(min, max)
    }

    #[test]
    fn weekly_on_multiples_of_seven() {
        assert_eq!(spanning(7), AutoSummary::Weekly);
        assert_eq!(spanning(14), AutoSummary::Weekly);
    }

    #[test]
    fn monthly_on_multiples_of_thirty() {
        assert_eq!(spanning(30), AutoSummary::Monthly);
        assert_eq!(spanning(60), AutoSummary::Monthly);
    }

    #[test]
    fn monthly_takes_priority() {
        assert_eq!(spanning(210), AutoSummary::Monthly);
    }

    #[test]
    fn nothing_otherwise() {
        assert_eq!(spanning(1), AutoSummary::None);
        assert_eq!(spanning(10), AutoSummary::None);
        assert_eq!(spanning(29), AutoSummary::None);
    }

    #[test]
    fn reversed_dates_never_fire() {
        let min = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let max = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(AutoSummary::decide(min, max), AutoSummary::None);
    }
}
