use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use fraud_drilldown::aggregator::Aggregator;
use fraud_drilldown::config::DashboardConfig;
use fraud_drilldown::dashboard::FraudDashboard;
use fraud_drilldown::source::{AnySource, DataSource, FileSource, HttpSource};
use fraud_drilldown::view;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 3 || args.iter().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        eprintln!("Usage: fraud-drilldown [source:optional] [log_level:optional] > [report].txt");
        eprintln!("Source is a backend URL (http://...) or a .json/.csv export (default: $FRAUD_DRILLDOWN_API_URL)");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    //NOTE: A missing .env file is the normal case outside of local development
    dotenvy::dotenv().ok();

    let config = DashboardConfig::from_env()?;
    let location = args.get(1).cloned().unwrap_or_else(|| config.api_url.clone());
    let source = build_source(&location, &config)?;

    let (dashboard, mut notices) = FraudDashboard::new(source, Aggregator::new(config.missing_client_policy));

    let timer = Instant::now();
    let report = dashboard.refresh().await;
    let duration = timer.elapsed();

    info!("Refresh [{}] from [{location}] finished in: {duration:?} (transactions: {:?}, metrics: {:?})", report.generation, report.transactions, report.metrics);

    while let Ok(notice) = notices.try_recv() {
        eprintln!("{notice}");
    }

    write_results_to_stdout(&dashboard)?;

    Ok(())
}

fn build_source(location: &str, config: &DashboardConfig) -> Result<AnySource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        return Ok(AnySource::Http(HttpSource::new(location, config.request_timeout)?));
    }

    let mut source = FileSource::new(location, config.csv_delimiter);

    if let Some(metrics_file) = &config.metrics_file {
        source = source.with_metrics(metrics_file);
    }

    Ok(AnySource::File(source))
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report goes to stdout, so logging has to use stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout<S: DataSource>(dashboard: &FraudDashboard<S>) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    let table = dashboard.table();
    let metrics = dashboard.metrics();

    view::write_report(
        &mut output,
        table.as_ref().map(|table| table.value.as_ref()),
        metrics.as_ref().map(|metrics| metrics.value.as_ref())
    )?;

    output.flush()?;

    Ok(())
}
