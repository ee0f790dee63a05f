//! CLI for IotSim
//!
//! Subcommands:
//! - `invoke`: run one invocation against the configured broker
//! - `build`: build a message and print it without publishing (useful for smoke tests)

use clap::Parser;
use iotsim::config::load_config;
use iotsim::handler;
use iotsim::publish::WsPublisher;
use iotsim::telemetry::{Readings, build_message};
use iotsim::utils::error::SimError;
use serde_json::json;
use tracing::error;

#[derive(Parser)]
#[command(name = "iotsim")]
enum Command {
    /// Build one telemetry message and publish it to the broker
    Invoke {
        /// Broker WebSocket URL (default: taken from configuration)
        #[arg(long)]
        url: Option<String>,
    },
    /// Build one telemetry message and print it to stdout
    Build {
        /// Device identifier (default: generated UUID v4)
        #[arg(long)]
        device_id: Option<String>,
        /// Temperature in °C (default: generated)
        #[arg(long)]
        temperature_c: Option<f64>,
        /// Relative humidity in % (default: generated)
        #[arg(long)]
        humidity_pct: Option<f64>,
        /// Battery voltage in mV (default: generated)
        #[arg(long)]
        battery_mv: Option<i64>,
    },
}

#[tokio::main]
async fn main() {
    iotsim::utils::logging::init("info");
    dotenvy::dotenv().ok();

    let cmd = Command::parse();

    match cmd {
        Command::Invoke { url } => {
            if let Err(e) = run_invoke(url).await {
                error!("Invocation failed: {}", e);
            }
        }
        Command::Build {
            device_id,
            temperature_c,
            humidity_pct,
            battery_mv,
        } => {
            let readings = Readings {
                device_id,
                temperature_c,
                humidity_pct,
                battery_mv,
            };
            if let Err(e) = run_build(readings) {
                error!("Build failed: {}", e);
            }
        }
    }
}

async fn run_invoke(url: Option<String>) -> Result<(), SimError> {
    let config = load_config()?;
    let url = url.unwrap_or(config.broker.url);

    let mut publisher = WsPublisher::connect(&url).await?;
    let response = handler::handle(json!({}), json!({}), &mut publisher, &config.device).await?;

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn run_build(readings: Readings) -> Result<(), SimError> {
    println!("{}", build_message(readings)?);
    Ok(())
}
