use chrono::NaiveDate;
use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    DeleteScope, Entry, EntryKind, EngineError, MAX_AMOUNT, ResultEngine, YearMonth,
    entry::{self, new_active_model},
};

use super::{Engine, with_tx};

impl Engine {
    /// Appends a new entry. The store assigns the id.
    pub async fn insert(
        &self,
        kind: EntryKind,
        amount: i64,
        note: &str,
        date: NaiveDate,
    ) -> ResultEngine<Entry> {
        if amount <= 0 || amount > MAX_AMOUNT {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be in 1..={MAX_AMOUNT}"
            )));
        }

        let model = with_tx!(self, |db_tx| {
            new_active_model(kind, amount, note, date)
                .insert(&db_tx)
                .await
                .map_err(EngineError::from)
        })?;
        tracing::debug!(id = model.id, kind = kind.as_str(), amount, "entry recorded");

        Entry::try_from(model)
    }

    /// Removes and returns the most recently inserted entry.
    pub async fn delete_last(&self) -> ResultEngine<Entry> {
        with_tx!(self, |db_tx| {
            let model = entry::Entity::find()
                .order_by_desc(entry::Column::Id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::NotFound("no entry to undo".to_string()))?;
            let id = model.id;
            let last = Entry::try_from(model)?;

            entry::Entity::delete_by_id(id).exec(&db_tx).await?;
            tracing::debug!(id, "entry undone");
            Ok(last)
        })
    }

    pub async fn delete_by_date(&self, date: NaiveDate) -> ResultEngine<u64> {
        with_tx!(self, |db_tx| {
            let result = entry::Entity::delete_many()
                .filter(entry::Column::Date.eq(date))
                .exec(&db_tx)
                .await?;
            tracing::debug!(%date, removed = result.rows_affected, "entries deleted");
            Ok(result.rows_affected)
        })
    }

    pub async fn delete_by_month(&self, month: YearMonth) -> ResultEngine<u64> {
        with_tx!(self, |db_tx| {
            let result = entry::Entity::delete_many()
                .filter(entry::Column::Date.between(month.first_day(), month.last_day()))
                .exec(&db_tx)
                .await?;
            tracing::debug!(%month, removed = result.rows_affected, "entries deleted");
            Ok(result.rows_affected)
        })
    }

    pub async fn delete_all(&self) -> ResultEngine<u64> {
        with_tx!(self, |db_tx| {
            let result = entry::Entity::delete_many().exec(&db_tx).await?;
            tracing::debug!(removed = result.rows_affected, "ledger wiped");
            Ok(result.rows_affected)
        })
    }

    /// Deletes every entry in `scope`, returning how many were removed.
    pub async fn delete(&self, scope: DeleteScope) -> ResultEngine<u64> {
        match scope {
            DeleteScope::All => self.delete_all().await,
            DeleteScope::Date(date) => self.delete_by_date(date).await,
            DeleteScope::Month(month) => self.delete_by_month(month).await,
        }
    }

    /// Entries whose note contains `keyword` (case-sensitive), oldest first.
    pub async fn find_by_keyword(&self, keyword: &str) -> ResultEngine<Vec<Entry>> {
        // `LIKE` is case-insensitive for ASCII and treats `%`/`_` as
        // wildcards, so it only narrows the candidates.
        let models = entry::Entity::find()
            .filter(entry::Column::Note.contains(keyword))
            .order_by_asc(entry::Column::Id)
            .all(&self.database)
            .await?;

        models
            .into_iter()
            .filter(|model| model.note.contains(keyword))
            .map(Entry::try_from)
            .collect()
    }

    /// Every entry, oldest first.
    pub async fn entries(&self) -> ResultEngine<Vec<Entry>> {
        entry::Entity::find()
            .order_by_asc(entry::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Entry::try_from)
            .collect()
    }

    /// Earliest and latest entry dates, `None` when the ledger is empty.
    pub async fn min_max_date(&self) -> ResultEngine<Option<(NaiveDate, NaiveDate)>> {
        with_tx!(self, |db_tx| {
            let first = entry::Entity::find()
                .order_by_asc(entry::Column::Date)
                .one(&db_tx)
                .await?;
            let last = entry::Entity::find()
                .order_by_desc(entry::Column::Date)
                .one(&db_tx)
                .await?;
            Ok::<_, EngineError>(first.zip(last).map(|(first, last)| (first.date, last.date)))
        })
    }
}
