use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use bankcal::configuration::Configuration;
use bankcal::database::sqlite;
use bankcal::logger::init_logger;
use bankcal::time::calendartime::CalendarTime;
use bankcal::time::recurringholiday::observedholiday::ObservedHoliday;

#[derive(Parser)]
#[command(name = "bankcal", version, about = "US business and Federal Reserve banking day calculations")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether an instant falls on a weekend, holiday, business or banking day
    Check {
        /// RFC 3339 instant, e.g. 2018-01-15T10:00:00-05:00
        instant: CalendarTime,
        /// IANA timezone to evaluate in (defaults to the configured one)
        #[arg(short, long)]
        timezone: Option<Tz>,
    },
    /// Step forward N business (or banking) days
    Add {
        instant: CalendarTime,
        #[arg(allow_negative_numbers = true)]
        days: i32,
        /// Count Federal Reserve banking days instead of business days
        #[arg(short, long)]
        banking: bool,
        #[arg(short, long)]
        timezone: Option<Tz>,
    },
    /// Open the configured sqlite database and run its migrations
    Migrate,
}

#[derive(Serialize)]
struct DayReport {
    time: CalendarTime,
    weekend: bool,
    holiday: Option<ObservedHoliday>,
    business_day: bool,
    banking_day: bool,
}

impl DayReport {
    fn new(time: CalendarTime) -> DayReport {
        DayReport {
            time,
            weekend: time.is_weekend(),
            holiday: time.get_holiday(),
            business_day: time.is_business_day(),
            banking_day: time.is_banking_day(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => Configuration::from_file(path)?,
        None => Configuration::default(),
    };
    debug!(timezone = %config.timezone(), "configuration loaded");

    match cli.command {
        Command::Check { instant, timezone } => {
            let when = instant.in_timezone(timezone.unwrap_or(config.timezone()));
            println!("{}", serde_json::to_string_pretty(&DayReport::new(when))?);
        }
        Command::Add { instant, days, banking, timezone } => {
            let when = instant.in_timezone(timezone.unwrap_or(config.timezone()));
            let landed = if banking {
                when.add_banking_day(days)
            } else {
                when.add_business_day(days)
            };
            println!("{}", landed.to_rfc3339());
        }
        Command::Migrate => {
            let Some(path) = config.database_path() else {
                bail!("no database configured: set {} or \"database.path\"", sqlite::SQLITE_DB_PATH);
            };
            let migrations = config.database().map(|db| db.migrations()).unwrap_or_default();
            let pool = sqlite::connect(&path).await?;
            sqlite::migrate(&pool, migrations)
                .await
                .with_context(|| format!("migrating {path}"))?;
            pool.close().await;
        }
    }

    Ok(())
}
