//! Ledger operations exposed to the chat layer.
//!
//! Each operation takes the shared [`Engine`] and the caller's local date,
//! and returns the reply text or a typed [`EngineError`]. Nothing here talks
//! to Telegram, so the whole command surface is testable against an
//! in-memory database.

use chrono::NaiveDate;
use engine::{
    AutoSummary, DateRange, DeleteScope, Engine, EngineError, EntryKind, Totals, parse_amount,
    parse_date,
};

use crate::ui;

type ReplyResult<T> = Result<T, EngineError>;

/// Records an entry dated `today`. The first reply is the confirmation; a
/// second one carries the weekly or monthly summary when the ledger history
/// has just reached that cadence. Once the insert has committed the
/// confirmation is always returned, and a failed summary becomes a second
/// reply holding the error text.
pub async fn record_transaction(
    engine: &Engine,
    kind: EntryKind,
    amount_text: &str,
    note: &str,
    today: NaiveDate,
) -> ReplyResult<Vec<String>> {
    let amount = parse_amount(amount_text)?;
    let entry = engine.insert(kind, amount, note.trim(), today).await?;
    tracing::info!(id = entry.id, kind = kind.as_str(), amount, "transaction recorded");

    let mut replies = vec![ui::recorded_text(&entry)];
    match auto_summary(engine, today).await {
        Ok(Some(summary)) => replies.push(summary),
        Ok(None) => {}
        Err(err) => {
            tracing::error!(id = entry.id, "auto summary failed: {err}");
            replies.push(ui::error_text(&err, ""));
        }
    }
    Ok(replies)
}

/// The summary to push after an insert, if any.
pub async fn auto_summary(engine: &Engine, today: NaiveDate) -> ReplyResult<Option<String>> {
    let Some((min_date, max_date)) = engine.min_max_date().await? else {
        return Ok(None);
    };

    match AutoSummary::decide(min_date, max_date) {
        AutoSummary::None => Ok(None),
        AutoSummary::Weekly => summary_this_week(engine, today).await.map(Some),
        AutoSummary::Monthly => summary_this_month(engine, today).await.map(Some),
    }
}

pub async fn undo_last(engine: &Engine) -> ReplyResult<String> {
    let entry = engine.delete_last().await?;
    tracing::info!(id = entry.id, "transaction undone");
    Ok(ui::undone_text(&entry))
}

/// Parses `/tong` arguments: nothing for the whole ledger, or two dates.
pub fn parse_range(args: &str) -> ReplyResult<Option<DateRange>> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    match parts.as_slice() {
        [] => Ok(None),
        [start, end] => Ok(Some(DateRange::new(parse_date(start)?, parse_date(end)?))),
        _ => Err(EngineError::InvalidScope(format!(
            "expected two dates, got \"{args}\""
        ))),
    }
}

pub async fn summary_for_range(engine: &Engine, range: Option<DateRange>) -> ReplyResult<String> {
    let totals = engine.summarize(range).await?;
    Ok(ui::range_text(range, &totals))
}

pub async fn summary_today(engine: &Engine, today: NaiveDate) -> ReplyResult<String> {
    let totals = engine.summary_today(today).await?;
    Ok(ui::today_text(&totals))
}

pub async fn summary_this_week(engine: &Engine, today: NaiveDate) -> ReplyResult<String> {
    let totals = engine.summary_this_week(today).await?;
    Ok(ui::week_text(&totals))
}

pub async fn summary_this_month(engine: &Engine, today: NaiveDate) -> ReplyResult<String> {
    let totals = engine.summary_this_month(today).await?;
    Ok(ui::month_text(&totals))
}

/// Deletes by `all`, `YYYY-MM-DD` or `YYYY-MM`.
pub async fn delete_by_scope(engine: &Engine, scope: &str) -> ReplyResult<String> {
    let scope: DeleteScope = scope.parse()?;
    let removed = engine.delete(scope).await?;
    tracing::info!(?scope, removed, "entries deleted");
    Ok(ui::deleted_text(scope, removed))
}

pub async fn search_by_keyword(engine: &Engine, keyword: &str) -> ReplyResult<String> {
    let entries = engine.find_by_keyword(keyword.trim()).await?;
    let totals = Totals::from_entries(&entries)?;
    Ok(ui::search_text(&entries, &totals))
}

/// Fixed text shown for `err`, using `usage` as the syntax hint.
pub fn error_text(err: &EngineError, usage: &str) -> String {
    ui::error_text(err, usage)
}
