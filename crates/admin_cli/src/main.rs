use std::{error::Error, io::Write};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    style::Print,
    terminal,
    terminal::ClearType,
};
use engine::{DateRange, DeleteScope, Engine, Totals, format_amount, parse_date};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "thuchi_admin")]
#[command(about = "Offline utilities for the thu-chi ledger")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./thuchi.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every entry, oldest first.
    List,
    /// Totals over the whole ledger or an inclusive date range.
    Summary {
        #[arg(long, value_parser = parse_date_arg, requires = "to")]
        from: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date_arg, requires = "from")]
        to: Option<NaiveDate>,
    },
    /// Entries whose note contains the keyword (case-sensitive).
    Search { keyword: String },
    /// Delete `all`, a `YYYY-MM-DD` date or a `YYYY-MM` month.
    Delete {
        scope: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Apply or inspect schema migrations without touching entries.
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
enum MigrateAction {
    /// Apply pending migrations.
    Up {
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Roll back applied migrations, all of them unless `--steps` is given.
    Down {
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Drop every table and re-apply all migrations.
    Fresh,
    /// List migrations with their status.
    Status,
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|err| err.to_string())
}

struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self, Box<dyn Error + Send + Sync>> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Single-key y/N prompt. Anything but `y` declines.
fn confirm(prompt: &str) -> Result<bool, Box<dyn Error + Send + Sync>> {
    let _raw = RawModeGuard::enter()?;

    let mut out = std::io::stderr();
    execute!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(format!("{prompt} [y/N] "))
    )?;
    out.flush()?;

    loop {
        let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        else {
            continue;
        };

        let answer = match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                execute!(out, Print("\r\n"))?;
                out.flush()?;
                return Err("interrupted".into());
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => true,
            KeyCode::Char(_) | KeyCode::Enter | KeyCode::Esc => false,
            _ => continue,
        };

        execute!(out, Print(if answer { "y\r\n" } else { "n\r\n" }))?;
        out.flush()?;
        return Ok(answer);
    }
}

fn print_totals(totals: &Totals) {
    println!("income:  {}", format_amount(totals.income));
    println!("expense: {}", format_amount(totals.expense));
    println!("balance: {}k", totals.balance());
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

async fn open_ledger(database_url: &str) -> Result<Engine, Box<dyn Error + Send + Sync>> {
    let db = connect_db(database_url).await?;
    Ok(Engine::builder().database(db).build().await?)
}

async fn migrate(
    database_url: &str,
    action: MigrateAction,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    match action {
        MigrateAction::Up { steps } => Migrator::up(&db, steps).await?,
        MigrateAction::Down { steps } => Migrator::down(&db, steps).await?,
        MigrateAction::Fresh => Migrator::fresh(&db).await?,
        MigrateAction::Status => {
            for migration in Migrator::get_migration_with_status(&db).await? {
                println!("{:?}\t{}", migration.status(), migration.name());
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    let url = cli.database_url.as_str();

    match cli.command {
        Command::Migrate { action } => migrate(url, action).await?,
        Command::List => {
            let engine = open_ledger(url).await?;
            for entry in engine.entries().await? {
                println!("#{} {} {}", entry.id, entry.date, entry);
            }
        }
        Command::Summary { from, to } => {
            let engine = open_ledger(url).await?;
            let range = from.zip(to).map(|(from, to)| DateRange::new(from, to));
            if let Some(range) = range {
                println!("{range}");
            }
            print_totals(&engine.summarize(range).await?);
        }
        Command::Search { keyword } => {
            let engine = open_ledger(url).await?;
            let entries = engine.find_by_keyword(&keyword).await?;
            if entries.is_empty() {
                println!("no entry matches \"{keyword}\"");
                return Ok(());
            }
            for entry in &entries {
                println!("#{} {} {}", entry.id, entry.date, entry);
            }
            print_totals(&Totals::from_entries(&entries)?);
        }
        Command::Delete { scope, yes } => {
            let parsed: DeleteScope = scope.parse()?;
            if !yes && !confirm(&format!("Delete entries for `{scope}`?"))? {
                println!("nothing deleted");
                return Ok(());
            }

            let engine = open_ledger(url).await?;
            let removed = engine.delete(parsed).await?;
            println!("deleted {removed} entries");
        }
    }

    Ok(())
}
