use crate::{EngineError, Entry, EntryKind, ResultEngine};

/// Aggregated income and expense over a set of entries, in thousand-VND
/// units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: i64,
    pub expense: i64,
}

impl Totals {
    pub const ZERO: Totals = Totals {
        income: 0,
        expense: 0,
    };

    /// Income minus expense; negative when spending exceeds earnings.
    pub fn balance(&self) -> i64 {
        self.income.saturating_sub(self.expense)
    }

    /// Adds one entry's amount to its side. A side that would overflow
    /// `i64` means the stored amounts are out of bounds.
    pub fn record(&mut self, kind: EntryKind, amount: i64) -> ResultEngine<()> {
        let side = match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expense,
        };
        *side = side.checked_add(amount).ok_or_else(|| {
            EngineError::Corrupted(format!("{} total overflows", kind.as_str()))
        })?;
        Ok(())
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> ResultEngine<Self> {
        let mut totals = Self::ZERO;
        for entry in entries {
            totals.record(entry.kind, entry.amount)?;
        }
        Ok(totals)
    }

    pub fn checked_add(self, rhs: Totals) -> Option<Totals> {
        Some(Totals {
            income: self.income.checked_add(rhs.income)?,
            expense: self.expense.checked_add(rhs.expense)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn entry(id: i64, kind: EntryKind, amount: i64) -> Entry {
        Entry {
            id,
            kind,
            amount,
            note: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn balance_may_be_negative() {
        let entries = [
            entry(1, EntryKind::Income, 100),
            entry(2, EntryKind::Expense, 250),
        ];
        let totals = Totals::from_entries(&entries).unwrap();
        assert_eq!(totals.income, 100);
        assert_eq!(totals.expense, 250);
        assert_eq!(totals.balance(), -150);
    }

    #[test]
    fn empty_is_zero() {
        let entries: [Entry; 0] = [];
        let totals = Totals::from_entries(&entries).unwrap();
        assert_eq!(totals, Totals::ZERO);
        assert_eq!(totals.balance(), 0);
    }

    #[test]
    fn overflowing_side_is_an_error() {
        let mut totals = Totals::ZERO;
        totals.record(EntryKind::Income, i64::MAX).unwrap();
        let err = totals.record(EntryKind::Income, 1).unwrap_err();
        assert!(matches!(err, EngineError::Corrupted(_)));
        assert_eq!(totals.income, i64::MAX);

        totals.record(EntryKind::Expense, i64::MAX).unwrap();
        assert_eq!(totals.balance(), 0);
    }

    #[test]
    fn checked_add_sums_both_sides() {
        let a = Totals {
            income: 10,
            expense: 3,
        };
        let b = Totals {
            income: 5,
            expense: 7,
        };
        assert_eq!(
            a.checked_add(b),
            Some(Totals {
                income: 15,
                expense: 10
            })
        );
        let full = Totals {
            income: i64::MAX,
            expense: 0,
        };
        assert_eq!(full.checked_add(a), None);
    }
}
