//! Telegram bot.
//!
//! The bot owns no state of its own: every command goes straight to the
//! shared [`engine::Engine`] through [`replies`].

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use engine::Engine;
use teloxide::{prelude::*, utils::command::BotCommands};

pub mod commands;
mod handlers;
pub mod replies;
mod ui;

pub use commands::LedgerCommands;

const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Ho_Chi_Minh;

#[derive(Clone)]
pub struct ConfigParameters {
    allowed_users: Option<Vec<UserId>>,
    engine: Engine,
    timezone: Tz,
}

impl ConfigParameters {
    /// The ledger's "today", in the configured timezone.
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

pub struct Bot {
    token: String,
    allowed_users: Option<Vec<UserId>>,
    engine: Engine,
    timezone: Tz,
}

impl Bot {
    pub fn new(
        token: &str,
        allowed_users: Option<Vec<UserId>>,
        engine: Engine,
        timezone: Tz,
    ) -> Result<Self, String> {
        if token.trim().is_empty() {
            return Err("telegram token must not be empty".to_string());
        }

        Ok(Self {
            token: token.to_string(),
            allowed_users,
            engine,
            timezone,
        })
    }

    pub fn builder() -> BotBuilder {
        BotBuilder::default()
    }

    pub async fn run(&self) {
        tracing::info!("Starting telegram bot...");

        let bot = teloxide::Bot::new(&self.token);
        if let Err(err) = bot.set_my_commands(LedgerCommands::bot_commands()).await {
            tracing::warn!("failed to publish the command list: {err}");
        }

        let parameters = ConfigParameters {
            allowed_users: self.allowed_users.clone(),
            engine: self.engine.clone(),
            timezone: self.timezone,
        };

        Dispatcher::builder(bot, handlers::schema())
            .dependencies(dptree::deps![parameters])
            .default_handler(|upd| async move {
                tracing::debug!("Unhandled update: {:?}", upd);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

#[derive(Default, Debug)]
pub struct BotBuilder {
    token: String,
    allowed_users: Option<Vec<UserId>>,
    engine: Option<Engine>,
    timezone: Option<Tz>,
}

impl BotBuilder {
    pub fn token(mut self, token: &str) -> BotBuilder {
        self.token = token.to_string();
        self
    }

    pub fn allowed_users(mut self, allowed_users: Vec<UserId>) -> BotBuilder {
        if !allowed_users.is_empty() {
            self.allowed_users = Some(allowed_users);
        }
        self
    }

    pub fn engine(mut self, engine: Engine) -> BotBuilder {
        self.engine = Some(engine);
        self
    }

    pub fn timezone(mut self, timezone: Tz) -> BotBuilder {
        self.timezone = Some(timezone);
        self
    }

    pub fn build(self) -> Result<Bot, String> {
        tracing::info!("Initializing telegram bot...");
        let engine = self
            .engine
            .ok_or_else(|| "an engine is required".to_string())?;
        let timezone = self.timezone.unwrap_or(DEFAULT_TIMEZONE);
        Bot::new(&self.token, self.allowed_users, engine, timezone)
    }
}
