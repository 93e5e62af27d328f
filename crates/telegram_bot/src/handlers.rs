//! Dispatcher schema: routes every `LedgerCommands` to its reply.

use engine::{EngineError, EntryKind};
use teloxide::{
    RequestError,
    dispatching::{HandlerExt, UpdateHandler},
    prelude::*,
    types::User,
};

use crate::{
    ConfigParameters,
    commands::LedgerCommands,
    replies, ui,
};

/// Build the schema for `LedgerCommands` commands
pub(crate) fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter(|cfg: ConfigParameters, msg: Message| is_allowed(&cfg, msg.from.as_ref()))
        .filter_command::<LedgerCommands>()
        .endpoint(handle_command)
}

async fn handle_command(
    bot: Bot,
    cfg: ConfigParameters,
    msg: Message,
    cmd: LedgerCommands,
) -> ResponseResult<()> {
    let engine = &cfg.engine;
    let today = cfg.today();
    tracing::debug!(chat = %msg.chat.id, ?cmd, %today, "command received");

    let (result, usage): (Result<Vec<String>, EngineError>, &str) = match cmd {
        LedgerCommands::Start | LedgerCommands::Help => (Ok(vec![ui::help_text()]), ""),
        LedgerCommands::Thu { amount, note } => (
            replies::record_transaction(engine, EntryKind::Income, &amount, &note, today).await,
            ui::USAGE_THU,
        ),
        LedgerCommands::Chi { amount, note } => (
            replies::record_transaction(engine, EntryKind::Expense, &amount, &note, today).await,
            ui::USAGE_CHI,
        ),
        LedgerCommands::Hoantac => (replies::undo_last(engine).await.map(single), ""),
        LedgerCommands::Tukhoa(keyword) => (
            replies::search_by_keyword(engine, &keyword).await.map(single),
            "",
        ),
        LedgerCommands::Xoa(scope) => (
            replies::delete_by_scope(engine, &scope).await.map(single),
            ui::USAGE_XOA,
        ),
        LedgerCommands::Tong(args) => {
            let result = match replies::parse_range(&args) {
                Ok(range) => replies::summary_for_range(engine, range).await.map(single),
                Err(err) => Err(err),
            };
            (result, ui::USAGE_TONG)
        }
        LedgerCommands::TongHomnay => (
            replies::summary_today(engine, today).await.map(single),
            "",
        ),
        LedgerCommands::TongTuan => (
            replies::summary_this_week(engine, today).await.map(single),
            "",
        ),
        LedgerCommands::TongThang => (
            replies::summary_this_month(engine, today).await.map(single),
            "",
        ),
    };

    let texts = match result {
        Ok(texts) => texts,
        Err(err) => {
            match &err {
                EngineError::Database(_) | EngineError::Corrupted(_) => {
                    tracing::error!("command failed: {err}")
                }
                _ => tracing::debug!("command rejected: {err}"),
            }
            vec![replies::error_text(&err, usage)]
        }
    };

    for text in texts {
        bot.send_message(msg.chat.id, text).await?;
    }

    Ok(())
}

fn single(text: String) -> Vec<String> {
    vec![text]
}

fn is_allowed(cfg: &ConfigParameters, from: Option<&User>) -> bool {
    let Some(from) = from else {
        return false;
    };
    match &cfg.allowed_users {
        None => true,
        Some(ids) => ids.contains(&from.id),
    }
}
