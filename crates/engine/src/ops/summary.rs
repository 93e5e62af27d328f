use chrono::NaiveDate;
use sea_orm::{QueryFilter, QuerySelect, prelude::*};

use crate::{DateRange, EntryKind, ResultEngine, Totals, entry};

use super::Engine;

impl Engine {
    /// Sums income and expense over `range` (inclusive), or over the whole
    /// ledger when no range is given.
    pub async fn summarize(&self, range: Option<DateRange>) -> ResultEngine<Totals> {
        let mut query = entry::Entity::find()
            .select_only()
            .column(entry::Column::Kind)
            .column(entry::Column::Amount);
        if let Some(range) = range {
            query = query.filter(entry::Column::Date.between(range.start, range.end));
        }

        let rows: Vec<(String, i64)> = query.into_tuple().all(&self.database).await?;

        let mut totals = Totals::ZERO;
        for (kind, amount) in rows {
            totals.record(EntryKind::try_from(kind.as_str())?, amount)?;
        }
        Ok(totals)
    }

    pub async fn summary_today(&self, today: NaiveDate) -> ResultEngine<Totals> {
        self.summarize(Some(DateRange::today(today))).await
    }

    pub async fn summary_this_week(&self, today: NaiveDate) -> ResultEngine<Totals> {
        self.summarize(Some(DateRange::this_week(today))).await
    }

    pub async fn summary_this_month(&self, today: NaiveDate) -> ResultEngine<Totals> {
        self.summarize(Some(DateRange::this_month(today))).await
    }
}
