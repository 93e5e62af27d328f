//! Handles settings for the application. Configuration is read from
//! `config/settings.toml` (optional) and `THUCHI__*` environment variables,
//! e.g. `THUCHI__TELEGRAM__TOKEN`.
//!
//! See `config/settings.example.toml` for the full layout.
use chrono_tz::Tz;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/settings";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
    pub timezone: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            timezone: "Asia/Ho_Chi_Minh".to_string(),
        }
    }
}

impl App {
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse()
            .map_err(|_| ConfigError::Message(format!("unknown timezone: {}", self.timezone)))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

fn default_database() -> Database {
    Database::Sqlite("thuchi.db".to_string())
}

#[derive(Debug, Deserialize)]
pub struct Telegram {
    pub token: String,
    #[serde(default)]
    pub allowed_users: Vec<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    #[serde(default = "default_database")]
    pub database: Database,
    pub telegram: Option<Telegram>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let path =
            std::env::var("THUCHI_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let settings = Config::builder()
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix("THUCHI")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("telegram.allowed_users"),
            )
            .build()?;

        settings.try_deserialize()
    }
}
