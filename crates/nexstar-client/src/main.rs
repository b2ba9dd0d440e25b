//! NexStar client command-line entry point.
//!
//! Connects to the hand controller, reports the mount's identity and state,
//! optionally issues a goto, then disconnects.
//!
//! # Usage
//!
//! ```text
//! nexstar-client [PORT] [AZIMUTH ELEVATION]
//! ```
//!
//! - `PORT` overrides the serial port from the config file
//!   (e.g. `/dev/ttyUSB0`, `COM3`).
//! - `AZIMUTH ELEVATION` (decimal degrees) issues a goto to that position.
//!
//! Configuration is read from the platform config file (see
//! `infrastructure::storage::config`); a missing file falls back to the
//! hand controller's standard link parameters.  The `RUST_LOG` environment
//! variable overrides the configured log level.

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use nexstar_client::infrastructure::storage::config::load_config;
use nexstar_client::TelescopeClient;

fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    // Initialise structured logging.  RUST_LOG wins over the config file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let port = args
        .first()
        .cloned()
        .unwrap_or_else(|| config.connection.port.clone());

    let target = match args.get(1).zip(args.get(2)) {
        Some((az, el)) => {
            let azimuth: f64 = az
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid azimuth: {az}"))?;
            let elevation: f64 = el
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid elevation: {el}"))?;
            Some((azimuth, elevation))
        }
        None => None,
    };

    let mut client = TelescopeClient::new(config.connection.link_config());
    client.connect(&port)?;

    match client.model() {
        Ok(model) => info!(%model, "mount identified"),
        Err(e) => warn!("model query failed: {e}"),
    }
    match client.is_aligned() {
        Ok(aligned) => info!(aligned, "alignment state"),
        Err(e) => warn!("alignment query failed: {e}"),
    }
    match client.is_moving() {
        Ok(moving) => info!(moving, "motion state"),
        Err(e) => warn!("motion query failed: {e}"),
    }

    if let Some((azimuth, elevation)) = target {
        if let Err(e) = client.goto_azm_elev(azimuth, elevation) {
            error!("goto failed: {e}");
            client.disconnect();
            return Err(e.into());
        }
        info!(azimuth, elevation, "goto issued; mount is slewing");
    }

    client.disconnect();
    Ok(())
}
