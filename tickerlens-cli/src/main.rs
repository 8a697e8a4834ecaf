//! TickerLens CLI — analyze, indicators, and synthetic commands.
//!
//! Commands:
//! - `analyze` — score one or more tickers and print a verdict summary
//! - `indicators` — dump the visible indicator window as CSV
//! - `synthetic` — print the deterministic synthetic series for a ticker

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tickerlens_core::data::{PriceHistoryProvider, YahooHistoryProvider};
use tickerlens_core::indicators::compute_indicators;
use tickerlens_core::synthetic::build_synthetic_series;
use tickerlens_runner::{
    analyze_many, export_indicators_csv, export_json, init_logging, load_series,
    normalize_ticker, save_report, AnalysisConfig, AnalysisContext, AnalysisReport, LoadOptions,
    LoggingConfig,
};

#[derive(Parser)]
#[command(
    name = "tickerlens",
    about = "TickerLens CLI — indicator and factor-score analysis for equities"
)]
struct Cli {
    /// Debug-level logging (overridden by RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score tickers on trend, mean reversion, and sentiment.
    Analyze {
        /// Tickers to analyze (e.g., AAPL MSFT).
        #[arg(required = true)]
        tickers: Vec<String>,

        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Offline mode: synthetic history, no real-time context.
        #[arg(long, default_value_t = false)]
        offline: bool,

        /// Trend factor weight.
        #[arg(long)]
        trend: Option<f64>,

        /// Mean-reversion factor weight.
        #[arg(long)]
        mean_rev: Option<f64>,

        /// Sentiment factor weight.
        #[arg(long)]
        sentiment: Option<f64>,

        /// Print full reports as JSON instead of the summary.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Write `{TICKER}_report.json` and `{TICKER}_indicators.csv` here.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Print the visible indicator window for a ticker as CSV.
    Indicators {
        ticker: String,

        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Offline mode: synthetic history.
        #[arg(long, default_value_t = false)]
        offline: bool,

        /// Write CSV to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the synthetic series for a ticker as CSV.
    Synthetic {
        ticker: String,

        /// Last day of the series (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig::verbose(cli.verbose))?;

    match cli.command {
        Commands::Analyze {
            tickers,
            config,
            offline,
            trend,
            mean_rev,
            sentiment,
            json,
            output_dir,
        } => {
            let mut config = load_config(config.as_deref())?;
            config.offline |= offline;
            if let Some(w) = trend {
                config.weights.trend = w;
            }
            if let Some(w) = mean_rev {
                config.weights.mean_rev = w;
            }
            if let Some(w) = sentiment {
                config.weights.sentiment = w;
            }
            config.validate()?;
            run_analyze(&tickers, &config, json, output_dir.as_deref())
        }
        Commands::Indicators {
            ticker,
            config,
            offline,
            output,
        } => {
            let mut config = load_config(config.as_deref())?;
            config.offline |= offline;
            run_indicators(&ticker, &config, output.as_deref())
        }
        Commands::Synthetic { ticker, end } => run_synthetic(&ticker, end.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(p) => AnalysisConfig::from_file(p)
            .with_context(|| format!("failed to load config {}", p.display())),
        None => Ok(AnalysisConfig::default()),
    }
}

fn run_analyze(
    tickers: &[String],
    config: &AnalysisConfig,
    json: bool,
    output_dir: Option<&Path>,
) -> Result<()> {
    let ctx = AnalysisContext::from_config(config, LoadOptions::today(config.offline))?;
    tracing::debug!(tickers = tickers.len(), offline = config.offline, "starting analysis");
    let mut failures = 0usize;

    for (ticker, result) in tickers.iter().zip(analyze_many(tickers, &ctx)) {
        let report = match result {
            Ok(report) => report,
            Err(err) => {
                eprintln!("Error for {ticker}: {err}");
                failures += 1;
                continue;
            }
        };

        if json {
            println!("{}", export_json(&report)?);
        } else {
            print_summary(&report);
        }

        if let Some(dir) = output_dir {
            let saved = save_report(&report, dir)?;
            println!("Report saved to: {}", saved.report_json.display());
        }
    }

    if failures > 0 {
        bail!("{failures} of {} ticker(s) failed", tickers.len());
    }
    Ok(())
}

fn run_indicators(ticker: &str, config: &AnalysisConfig, output: Option<&Path>) -> Result<()> {
    let ticker = normalize_ticker(ticker)?;
    let provider = if config.offline {
        None
    } else {
        Some(YahooHistoryProvider::new(
            &config.providers.history_base_url,
            config.providers.timeout(),
        )?)
    };
    let provider_ref = provider.as_ref().map(|p| p as &dyn PriceHistoryProvider);

    let loaded = load_series(&ticker, provider_ref, &LoadOptions::today(config.offline));
    let csv = export_indicators_csv(&compute_indicators(&loaded.series))?;

    match output {
        Some(path) => {
            std::fs::write(path, csv)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Indicators saved to: {}", path.display());
        }
        None => print!("{csv}"),
    }
    if loaded.is_synthetic() {
        eprintln!("WARNING: {ticker} indicators based on SYNTHETIC data");
    }
    Ok(())
}

fn run_synthetic(ticker: &str, end: Option<&str>) -> Result<()> {
    let ticker = normalize_ticker(ticker)?;
    let end = match end {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid --end date '{s}' (expected YYYY-MM-DD)"))?,
        None => chrono::Local::now().date_naive(),
    };

    println!("date,price,volume");
    for p in build_synthetic_series(&ticker, end) {
        println!("{},{:.6},{}", p.date, p.price, p.volume);
    }
    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    let latest = &report.latest;
    let score = &report.score;
    let fmt_opt = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));

    println!();
    println!("=== {} ===", report.ticker);
    if let Some(profile) = &report.profile {
        println!("Company:        {}", profile.name);
    }
    println!("As of:          {}", latest.date);
    println!("Price:          {:.2}", latest.price);
    if let Some(quote) = &report.quote {
        println!(
            "Quote:          {:.2} ({:+.2}%)",
            quote.current, quote.percent_change
        );
    }
    println!();
    println!("--- Indicators ---");
    println!("SMA50:          {}", fmt_opt(latest.sma50));
    println!("SMA200:         {}", fmt_opt(latest.sma200));
    println!("RSI14:          {:.1}", latest.rsi);
    println!(
        "Bollinger:      {} / {}",
        fmt_opt(latest.bb_lower),
        fmt_opt(latest.bb_upper)
    );
    println!("Z-Score:        {:.2}", latest.z_score);
    println!();
    println!("--- Score ---");
    println!("Trend:          {:+}", score.trend_score);
    println!("Mean Reversion: {:+}", score.rev_score);
    println!("Sentiment:      {:+}", score.sentiment_score);
    println!("Total:          {:.2}", score.total_score);
    println!("Verdict:        {}", score.verdict);
    println!("Position:       {:.1}%", score.position_size);
    if report.source.is_synthetic() {
        println!();
        println!("WARNING: Results based on SYNTHETIC data");
        if let Some(reason) = &report.fallback_reason {
            println!("Reason:         {reason}");
        }
    }
    println!();
}
