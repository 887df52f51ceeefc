use analytics::AnalyticsEngine;
use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::{LogLevel, Settings};
use std::path::PathBuf;
use storage::JsonStore;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod report;

/// The main entry point for the Profitlens application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load PROFITLENS__* overrides from a .env file if one is present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = configuration::load_settings(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }

    // Keep the guard alive for the whole run so buffered file logs are flushed on exit.
    let _log_guard = init_tracing(&settings)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => handle_serve(args, settings).await,
        Commands::Report(args) => handle_report(args, settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Product and order profitability analytics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. It is optional; defaults apply when absent.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Overrides `logging.level` from the configuration.
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the REST backend over the data file.
    Serve(ServeArgs),
    /// Print the order analytics table for the data file.
    Report(ReportArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Address to bind (defaults to `server.host`).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (defaults to `server.port`).
    #[arg(long)]
    port: Option<u16>,

    /// Data file to serve (defaults to `storage.data_file`).
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Parser)]
struct ReportArgs {
    /// Data file to analyse (defaults to `storage.data_file`).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Print the analytics as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(args: ServeArgs, mut settings: Settings) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(data) = args.data {
        settings.storage.data_file = data;
    }
    settings.validate()?;

    web_server::run_server(&settings).await
}

async fn handle_report(args: ReportArgs, settings: Settings) -> anyhow::Result<()> {
    let path = args.data.unwrap_or(settings.storage.data_file);
    let data = JsonStore::new(path.clone()).load().await;
    tracing::info!(
        path = %path.display(),
        products = data.products.len(),
        orders = data.orders.len(),
        "Loaded dataset."
    );

    let snapshot = AnalyticsEngine::new().analyze(&data.orders, &data.products);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", report::render_table(&snapshot));
        println!(
            "Total Sales: {}   Total Profit: {}   Average Margin: {}",
            report::format_currency(snapshot.totals.sales),
            report::format_currency(snapshot.totals.gross_profit),
            report::format_total_margin(&snapshot.totals),
        );
    }

    Ok(())
}

// ==============================================================================
// Logging
// ==============================================================================

/// Sets up stderr logging, plus a daily rolling file when `logging.directory` is configured.
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(settings: &Settings) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.as_directive()));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &settings.logging.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "profitlens.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialise tracing")?;

    Ok(guard)
}
