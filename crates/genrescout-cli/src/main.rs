use std::io::BufRead;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use genrescout_lookup::WikipediaClient;
use genrescout_model::Query;
use genrescout_resolve::resolve_batch;

#[derive(Parser)]
#[command(name = "genrescout")]
#[command(about = "Look up album genres on Wikipedia")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,

    /// Queries of the form "ARTIST - ALBUM" or "ALBUM". With no queries,
    /// playlist-style lines are read from stdin until a blank line or EOF.
    queries: Vec<String>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let queries = if cli.queries.is_empty() {
        queries_from_stdin().context("error reading queries from stdin")?
    } else {
        genrescout_parse::from_args(&cli.queries)
    };

    let client = Arc::new(WikipediaClient::new()?);
    tracing::info!(queries = queries.len(), "Resolving batch");
    let results = resolve_batch(&queries, client).await;

    for failure in &results.failures {
        tracing::error!("{failure}");
    }
    for genres in &results.genres {
        println!("{}", genres.join("; "));
    }

    if results.failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Read playlist-style lines from stdin, stopping at a blank line or EOF.
fn queries_from_stdin() -> Result<Vec<Query>> {
    let mut lines = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(genrescout_parse::from_lines(&lines))
}

fn init_tracing(cli: &Cli) {
    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    // Results go to stdout; all diagnostics go to stderr.
    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }
}
