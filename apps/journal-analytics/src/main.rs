//! Journal Analytics Binary
//!
//! Builds the dashboard report for a journal snapshot and prints it to
//! stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin journal-analytics -- snapshot.json --account acc-1 --format text
//! ```
//!
//! # Environment Variables
//!
//! - `JOURNAL_CONFIG`: YAML config path (default: journal.yaml, optional)
//! - `JOURNAL_SNAPSHOT`: snapshot path when none is given as an argument
//! - `JOURNAL_EQUITY_BUCKETING`: per_trade | daily
//! - `JOURNAL_OUTPUT`: json | text
//! - `JOURNAL_LOG_LEVEL`: default log filter
//! - `RUST_LOG`: log filter (overrides `JOURNAL_LOG_LEVEL`)

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use journal_analytics::application::{DashboardService, TradeFilter, load_snapshot, render_text};
use journal_analytics::domain::journal::{Direction, Session};
use journal_analytics::domain::shared::{AccountId, StrategyId};
use journal_analytics::infrastructure::{Config, OutputFormat, init_tracing, load_config};

#[derive(Parser, Debug)]
#[command(
    name = "journal-analytics",
    version,
    about = "Trade metrics and performance dashboard for a journal snapshot"
)]
struct Cli {
    /// JSON snapshot with trades, strategies and accounts.
    snapshot: Option<PathBuf>,
    /// YAML config file.
    #[arg(short, long)]
    config: Option<String>,
    /// Output format.
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,
    /// Only trades in this symbol.
    #[arg(long)]
    symbol: Option<String>,
    /// Only trades under this strategy id.
    #[arg(long)]
    strategy: Option<String>,
    /// Only trades in this account id.
    #[arg(long)]
    account: Option<String>,
    /// Only trades in this session.
    #[arg(long, value_enum, ignore_case = true)]
    session: Option<SessionArg>,
    /// Only trades in this direction.
    #[arg(long, value_enum, ignore_case = true)]
    direction: Option<DirectionArg>,
    /// Only trades entered on or after this date (YYYY-MM-DD, UTC).
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Only trades exited on or before this date (YYYY-MM-DD, UTC).
    #[arg(long)]
    to: Option<NaiveDate>,
}

impl Cli {
    fn filter(&self) -> TradeFilter {
        TradeFilter {
            symbol: self.symbol.clone(),
            strategy_id: self.strategy.as_deref().map(StrategyId::new),
            account_id: self.account.as_deref().map(AccountId::new),
            session: self.session.map(Session::from),
            direction: self.direction.map(Direction::from),
            start: self.from.and_then(start_of_day),
            end: self.to.and_then(end_of_day),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Text => Self::Text,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SessionArg {
    #[value(name = "NY", alias = "new_york")]
    NewYork,
    London,
    Asia,
}

impl From<SessionArg> for Session {
    fn from(value: SessionArg) -> Self {
        match value {
            SessionArg::NewYork => Self::NewYork,
            SessionArg::London => Self::London,
            SessionArg::Asia => Self::Asia,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DirectionArg {
    Long,
    Short,
}

impl From<DirectionArg> for Direction {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Long => Self::Long,
            DirectionArg::Short => Self::Short,
        }
    }
}

fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

fn end_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .map(|dt| dt.and_utc())
}

fn main() -> Result<()> {
    load_dotenv();
    let cli = Cli::parse();

    let config = load_configuration(&cli)?;
    init_tracing(&config.logging).context("Failed to initialize logging")?;

    let Some(snapshot_path) = cli
        .snapshot
        .clone()
        .or_else(|| config.snapshot.as_ref().map(PathBuf::from))
    else {
        bail!("No snapshot given: pass a path or set JOURNAL_SNAPSHOT");
    };

    tracing::info!(
        snapshot = %snapshot_path.display(),
        bucketing = ?config.analytics.equity_bucketing,
        output = ?config.output.format,
        "Starting journal analytics"
    );

    let snapshot = load_snapshot(&snapshot_path)
        .with_context(|| format!("Failed to load snapshot {}", snapshot_path.display()))?;

    let service = DashboardService::new(
        config.analytics.equity_bucketing,
        config.analytics.parallel_threshold,
    );
    let report = service.build(&snapshot, &cli.filter());

    match config.output.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", render_text(&report, config.output.decimal_places)),
    }

    Ok(())
}

/// Config file, then `JOURNAL_*` variables, then command-line flags.
fn load_configuration(cli: &Cli) -> Result<Config> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var("JOURNAL_CONFIG").ok());

    let mut config = load_config(path.as_deref())
        .context("Failed to load configuration")?
        .with_env_overrides()
        .context("Invalid environment override")?;

    if let Some(format) = cli.format {
        config.output.format = format.into();
    }

    Ok(config)
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
