//! sentiment-trader - Main Entry Point
//!
//! Loads a company sentiment list, runs one trading orchestration against
//! the TradeKing API, and exits non-zero when any strategy failed.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use sentiment_trader::config::{load_config, load_from_env};
use sentiment_trader::{Company, TradeKingClient, Trader};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON file with company signals:
    /// [{"ticker": "F", "name": "Ford", "sentiment": 0.3}, ...]
    #[arg(short, long)]
    companies: String,

    /// Path to configuration file; TRADEKING_* environment variables are
    /// used when omitted
    #[arg(long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => load_config(Some(path))?,
        None => load_from_env()?,
    };

    if config.trading.use_real_money {
        warn!("live trading enabled, orders will execute with real money");
    } else {
        info!("preview mode, orders will be validated but not executed");
    }

    let companies_json = std::fs::read_to_string(&args.companies)
        .with_context(|| format!("failed to read companies file {}", args.companies))?;
    let companies: Vec<Company> = serde_json::from_str(&companies_json)
        .with_context(|| format!("failed to parse companies file {}", args.companies))?;

    info!(count = companies.len(), "loaded company signals");

    let broker = TradeKingClient::new(&config.broker, config.trading.use_real_money)?;
    let trader = Trader::new(broker, config.trading);

    let success = trader.make_trades(&companies).await?;
    if success {
        info!("all strategies executed successfully");
        Ok(())
    } else {
        warn!("one or more strategies failed");
        std::process::exit(1);
    }
}
