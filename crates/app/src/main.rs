use migration::{Migrator, MigratorTrait};
use settings::Database;
use teloxide::types::UserId;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "thuchi={level},telegram_bot={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let timezone = settings.app.timezone()?;
    let db = parse_database(&settings.database).await?;
    let engine = engine::Engine::builder().database(db).build().await?;
    tracing::info!("Ledger ready, local timezone {}", timezone.name());

    let Some(telegram) = settings.telegram else {
        tracing::error!("No telegram settings found, nothing to run");
        return Ok(());
    };

    tracing::info!("Found telegram settings...");
    let allowed_users = telegram.allowed_users.into_iter().map(UserId).collect();
    let bot = telegram_bot::Bot::builder()
        .token(&telegram.token)
        .allowed_users(allowed_users)
        .engine(engine)
        .timezone(timezone)
        .build()?;
    bot.run().await;

    Ok(())
}

async fn parse_database(
    config: &Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = match config {
        Database::Memory => String::from("sqlite::memory:"),
        Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path),
    };

    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
