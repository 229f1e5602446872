//! Bus reminder CLI
//!
//! Checks the next bus on the configured route once and stores either a
//! reminder or an alert in the calendar.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use application::{
    BusReminderService, ItineraryPort, NotificationSinkPort, RunOutcome, RunReport,
};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use infrastructure::{
    AppConfig, CalDavNotificationAdapter, DirectionsItineraryAdapter, LogNotificationSink,
    LoggingConfig, init_logging,
};
use integration_caldav::HttpCalDavClient;
use integration_directions::GoogleDirectionsClient;
use tracing::{debug, error, info, warn};

/// Bus reminder CLI
#[derive(Parser)]
#[command(name = "bus-reminder")]
#[command(author, version, about = "Calendar reminders for the school bus", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: bus-reminder.toml if present)
    #[arg(short, long, env = "BUS_REMINDER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the next bus and store a reminder or alert (default)
    Run {
        /// Log the notification instead of writing it to CalDAV
        #[arg(long)]
        dry_run: bool,

        /// Pretend the current time is this RFC 3339 instant
        #[arg(long, value_parser = parse_instant)]
        now: Option<DateTime<Utc>>,
    },

    /// Print the effective configuration (secrets omitted)
    ShowConfig,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `-v` wins over `logging.filter`; with neither, the ladder's `warn` applies
fn apply_verbosity(logging: &mut LoggingConfig, verbose: u8) {
    if verbose > 0 || logging.filter.is_none() {
        logging.filter = Some(log_filter_from_verbosity(verbose).to_string());
    }
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    apply_verbosity(&mut config.logging, cli.verbose);
    init_logging(&config.logging)?;

    debug!(route = %config.route.route_id, "Configuration loaded");
    for warning in config.startup_warnings() {
        warn!("{warning}");
    }

    match cli.command.unwrap_or(Commands::Run {
        dry_run: false,
        now: None,
    }) {
        Commands::Run { dry_run, now } => run(&config, dry_run, now).await,
        Commands::ShowConfig => {
            println!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        },
    }
}

async fn run(
    config: &AppConfig,
    dry_run: bool,
    now: Option<DateTime<Utc>>,
) -> anyhow::Result<ExitCode> {
    let run_config = config
        .to_bus_reminder_config()
        .context("invalid route configuration")?;

    let directions = GoogleDirectionsClient::new(
        &config.directions.to_directions_config(),
        config.directions.api_key(),
    )?;
    let itinerary: Arc<dyn ItineraryPort> =
        Arc::new(DirectionsItineraryAdapter::new(Arc::new(directions)));

    let sink: Arc<dyn NotificationSinkPort> = if dry_run {
        Arc::new(LogNotificationSink::new())
    } else {
        let caldav = config
            .caldav
            .as_ref()
            .context("no [caldav] section configured; add one or use --dry-run")?;
        let client = HttpCalDavClient::new(caldav.to_caldav_config())?;
        let calendar = client.default_calendar().to_string();
        Arc::new(CalDavNotificationAdapter::new(Arc::new(client), calendar))
    };

    let service = BusReminderService::new(itinerary, sink, run_config);
    let report = match now {
        Some(now) => service.run_at(now).await,
        None => service.run().await,
    };

    print_summary(&report);

    if report.is_success() {
        info!("Run succeeded");
        Ok(ExitCode::SUCCESS)
    } else {
        error!("Run failed");
        Ok(ExitCode::FAILURE)
    }
}

fn print_summary(report: &RunReport) {
    match &report.outcome {
        RunOutcome::Scheduled { bus, plan } => {
            println!(
                "🚌 Bus {} departs {} from {}, arrives {}",
                bus.route_short_name,
                bus.departure_hhmm(),
                bus.departure_stop,
                bus.arrival_hhmm()
            );
            println!(
                "⏰ Reminder at {} ({} min before)",
                plan.reminder_at.format("%H:%M"),
                plan.minutes_before
            );
        },
        RunOutcome::Alerted(reason) => {
            println!("⚠️  No reminder scheduled ({})", reason.kind());
        },
    }

    match &report.delivery {
        Ok(receipt) => match &receipt.link {
            Some(link) => println!("✅ Stored: {link}"),
            None => println!("✅ Stored: {}", receipt.reference),
        },
        Err(e) => println!("❌ Delivery failed: {e}"),
    }
}
