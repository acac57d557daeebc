use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use reltime::RelativeTimeFormatter;
use reltime::i18n::Catalog;
use reltime::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "reltime", version, about = "Format dates as relative time")]
struct Cli {
    /// Dates to format (RFC 3339, RFC 2822, YYYY-MM-DD[ HH:MM[:SS]], @UNIX or now)
    #[arg(required = true)]
    dates: Vec<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a Fluent message catalog, overriding the config
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Maximum number of units to print
    #[arg(short, long)]
    units: Option<usize>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    let guard = setup_logging(&config, cli.debug)?;

    info!("reltime starting");

    let catalog = match cli.catalog {
        Some(ref path) => Catalog::load(path, &config.catalog.locale)?,
        None => config.load_catalog()?,
    };

    let units_limit = cli.units.unwrap_or(config.format.units_limit);
    let formatter = match RelativeTimeFormatter::new(catalog).with_units_limit(units_limit) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut failed = false;
    for date in &cli.dates {
        match formatter.format(date) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            }
        }
    }

    if failed {
        drop(guard);
        std::process::exit(1);
    }
    Ok(())
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "reltime.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("reltime=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
