//! Reservation tracker demo
//!
//! Builds one manager, runs a short booking session against it and prints the
//! resulting listing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use hotel_reservations::{to_json, to_xml, Client, ManagerConfig, ReservationManager};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Xml,
}

#[derive(Debug, Parser)]
#[command(version, about = "In-memory hotel reservation tracker")]
struct Cli {
    /// JSON file with manager settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the hotel name
    #[arg(long)]
    hotel: Option<String>,

    /// Listing output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => ManagerConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ManagerConfig::default(),
    };
    if let Some(hotel) = cli.hotel {
        config.hotel_name = hotel;
        config.validate()?;
    }

    let mut manager = ReservationManager::new(config);
    let pricing = manager.config();
    info!(
        hotel = manager.hotel_name(),
        base_price = pricing.base_price,
        breakfast_multiplier = pricing.breakfast_multiplier,
        "Reservation manager ready"
    );

    run_session(&mut manager);

    let listing = match cli.format {
        OutputFormat::Json => to_json(manager.list())?,
        OutputFormat::Xml => to_xml(manager.hotel_name(), manager.list())?,
    };
    println!("{}", listing);

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("hotel_reservations={}", level)))?;

    fmt().with_env_filter(filter).with_target(false).init();
    Ok(())
}

fn run_session(manager: &mut ReservationManager) {
    let goku = Client::new("Goku", 40, 1.85);
    let vegeta = Client::new("Vegeta", 38, 1.75);
    let bardock = Client::new("Bardock", 42, 1.83);
    let cell = Client::new("Cell", 65, 2.10);
    let gohan = Client::new("Gohan", 23, 1.75);

    let bookings = [
        (vec![goku], 1, true),
        (vec![vegeta], 5, true),
        (vec![bardock.clone()], 3, false),
        (vec![cell], 2, false),
        (vec![gohan], 1, false),
        // Bardock is already booked
        (vec![bardock], 5, false),
    ];

    for (clients, duration, breakfast) in bookings {
        if let Err(e) = manager.create(clients, duration, breakfast) {
            warn!("Booking rejected: {}", e);
        }
    }

    if let Err(e) = manager.cancel(2) {
        warn!("Cancellation failed: {}", e);
    }
    if let Err(e) = manager.cancel(2) {
        warn!("Cancellation failed: {}", e);
    }

    info!(active = manager.len(), "Session finished");
}
