//! wanderstay: search hotels, quote stays and manage bookings.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use wanderstay_booking::BookingError;
use wanderstay_cli::output::{print_json, OutputFormat};
use wanderstay_core::config::Config;
use wanderstay_telemetry::TelemetryConfig;

mod commands;
mod context;

use commands::{booking, bookmark, hotels, packages, places};
use context::AppContext;

/// Travel booking from the terminal
#[derive(Parser)]
#[command(name = "wanderstay")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to wanderstay.toml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Work against a local db.json file instead of the backend
    #[arg(long, global = true, value_name = "DB_JSON")]
    offline: Option<PathBuf>,

    /// Email of the user to act as
    #[arg(short, long, global = true, env = "WANDERSTAY_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List hotels, optionally filtered by a fuzzy query
    Hotels {
        /// Name or address to look for; small typos are tolerated
        query: Option<String>,

        /// Only hotels of this place
        #[arg(short, long)]
        place: Option<String>,
    },

    /// Search places
    Places {
        /// Free-text query
        query: Option<String>,
    },

    /// Price a stay without booking it
    Quote {
        /// Hotel id
        hotel: String,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: NaiveDate,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: NaiveDate,

        /// Number of rooms
        #[arg(short, long, default_value = "1")]
        rooms: u32,
    },

    /// Book a hotel stay
    Book {
        /// Hotel id
        hotel: String,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: NaiveDate,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: NaiveDate,

        /// Number of guests
        #[arg(short, long, default_value = "1")]
        guests: u32,

        /// Number of rooms
        #[arg(short, long, default_value = "1")]
        rooms: u32,
    },

    /// Cancel a booking
    Cancel {
        /// Booking id
        booking: String,
    },

    /// List the user's hotel bookings
    Bookings,

    /// List tour packages
    Packages,

    /// Book a tour package
    BookPackage {
        /// Package id
        package: String,
    },

    /// Bookmark a place, or remove the bookmark if already set
    Bookmark {
        /// Place id
        place: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err((format, e)) => {
            report_error(format, &e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), (OutputFormat, anyhow::Error)> {
    let format = cli.format;
    let fail = |e: anyhow::Error| (format, e);

    let config = Config::load(cli.config.as_deref()).map_err(|e| fail(e.into()))?;

    let telemetry = TelemetryConfig::from(&config.schema.logging).verbose(cli.verbose);
    if let Err(e) = wanderstay_telemetry::init_with_config(telemetry) {
        eprintln!("{} {e}", "Warning:".yellow());
    }
    tracing::debug!(config = ?config.path, offline = ?cli.offline, "Starting");

    let ctx = AppContext::new(config, cli.offline.as_deref(), format, cli.user)
        .map_err(fail)?;

    let result = match cli.command {
        Commands::Hotels { query, place } => {
            hotels::list(&ctx, query.as_deref(), place.as_deref()).await
        }
        Commands::Places { query } => places::list(&ctx, query.as_deref()).await,
        Commands::Quote {
            hotel,
            check_in,
            check_out,
            rooms,
        } => hotels::quote(&ctx, &hotel, check_in, check_out, rooms).await,
        Commands::Book {
            hotel,
            check_in,
            check_out,
            guests,
            rooms,
        } => booking::book(&ctx, &hotel, check_in, check_out, guests, rooms).await,
        Commands::Cancel { booking } => booking::cancel(&ctx, &booking).await,
        Commands::Bookings => booking::list(&ctx).await,
        Commands::Packages => packages::list(&ctx).await,
        Commands::BookPackage { package } => packages::book(&ctx, &package).await,
        Commands::Bookmark { place } => bookmark::toggle(&ctx, &place).await,
    };

    tracing::debug!(
        ok = result.is_ok(),
        metrics = %wanderstay_telemetry::metrics().export_json(),
        "Command finished"
    );
    result.map_err(fail)
}

fn report_error(format: OutputFormat, e: &anyhow::Error) {
    if let Some(core) = e.downcast_ref::<wanderstay_core::Error>() {
        if format == OutputFormat::Json {
            let _ = print_json(&core.to_report());
            return;
        }
        eprintln!("{} {core}", "Error:".red().bold());
        return;
    }

    if let Some(booking) = e.downcast_ref::<BookingError>() {
        if format == OutputFormat::Json {
            let _ = print_json(&serde_json::json!({
                "code": booking.code() as u32,
                "message": booking.to_string(),
            }));
            return;
        }
        eprintln!(
            "{} {} {}",
            "Error:".red().bold(),
            booking,
            format!("[E{}]", booking.code() as u32).dimmed()
        );
        return;
    }

    eprintln!("{} {e:#}", "Error:".red().bold());
}
