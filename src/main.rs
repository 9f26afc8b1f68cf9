//! Parkgate - entry/exit lifecycle management for a small parking facility
//!
//! A vehicle enters, an identity snapshot is taken, a session opens; on exit
//! the identity is re-checked against the stored snapshot, a duration-based
//! fee is computed, and the session closes.
//!
//! Module structure:
//! - `domain/` - Core business types (ParkingSession, Bill, IdentitySignature)
//! - `io/` - External interfaces (attendant console, HTTP detector probe)
//! - `services/` - Business logic (controller, session store, rates, probe)
//! - `infra/` - Infrastructure (Config)

use clap::Parser;
use parkgate::infra::{Config, ProbeMode};
use parkgate::io::{Console, HttpProbe};
use parkgate::services::{IdentityProbe, ParkingController, SimulatedProbe};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Parkgate - parking facility entry/exit controller
#[derive(Parser, Debug)]
#[command(name = "parkgate", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "config/dev.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging with configurable level via RUST_LOG env var
    // Default: INFO, use RUST_LOG=debug for full event visibility
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .init();

    info!("parkgate starting");

    let args = Args::parse();
    let config = Config::load_from_path(&args.config);

    let probe_mode_str = match config.probe_mode() {
        ProbeMode::Simulated => "simulated",
        ProbeMode::Http => "http",
    };
    info!(
        config_file = %config.config_file(),
        facility = %config.facility_name(),
        first_hour_fee = %config.first_hour_fee(),
        additional_hour_fee = %config.additional_hour_fee(),
        probe_mode = %probe_mode_str,
        sample_timeout_ms = %config.sample_timeout_ms(),
        "config_loaded"
    );

    let sample_timeout = Duration::from_millis(config.sample_timeout_ms());
    let probe: Arc<dyn IdentityProbe> = match config.probe_mode() {
        ProbeMode::Simulated => Arc::new(SimulatedProbe::new(config.probe_base_signature())),
        ProbeMode::Http => Arc::new(HttpProbe::new(config.probe_url(), sample_timeout)),
    };

    let controller =
        Arc::new(ParkingController::new(config.rate_schedule(), probe, sample_timeout));

    let console = Console::new(controller, config.facility_name(), config.currency_prefix());
    console.run().await?;

    info!("parkgate shutdown complete");
    Ok(())
}
