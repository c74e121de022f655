//! Engine binary for the synthetic compliance alert generator.
//!
//! Wires the dataset pipeline and the query API together.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `alertgen-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Generate the alert store
//! 4. Spawn the query API on a background task
//! 5. Export the store to CSV
//! 6. Normalize the store into a table and log a preview
//! 7. Keep serving until the server stops or Ctrl-C is received

mod error;

use std::path::Path;
use std::sync::Arc;

use alertgen_core::{AlertgenConfig, Table};
use alertgen_observer::{AppState, ServerConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Number of rows shown in the logged table preview.
const PREVIEW_ROWS: usize = 5;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, server startup, or the CSV export
/// fails.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let config = load_config(Path::new(alertgen_core::config::CONFIG_FILE))?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        count = config.generator.count,
        seed = ?config.generator.seed,
        host = %config.server.host,
        port = config.server.port,
        export_path = %config.export.path.display(),
        "alertgen-engine starting"
    );

    // 3. Generate the dataset. The store is read-only from here on.
    let mut rng = rng_for(config.generator.seed);
    let store = Arc::new(alertgen_core::generate(config.generator.count, &mut rng));

    // 4. Start the query API.
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let state = Arc::new(AppState::new(Arc::clone(&store)));
    let running = alertgen_observer::spawn_observer(&server_config, state).await?;
    info!(addr = %running.local_addr, "Alert query API started");

    // 5. Export.
    let rows = alertgen_core::export_csv(&store, &config.export.path)?;
    info!(rows, path = %config.export.path.display(), "CSV export complete");

    // 6. Normalize and preview.
    let table = Table::from_alerts(store.as_ref());
    info!(
        rows = table.row_count(),
        columns = table.columns().len(),
        "Alerts normalized\n{}",
        table.head(PREVIEW_ROWS)
    );
    for column in ["impact_level", "status", "assigned_to"] {
        if let Some(counts) = table.value_counts(column) {
            info!(column, ?counts, "Value counts");
        }
    }

    // 7. Serve until stopped.
    tokio::select! {
        joined = running.handle => {
            joined.map_err(|e| EngineError::ObserverTask {
                message: e.to_string(),
            })?;
            warn!("Alert query server stopped");
        }
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                warn!(error = %e, "failed to listen for Ctrl-C");
            }
            info!("Ctrl-C received, shutting down");
        }
    }

    info!("alertgen-engine shutdown complete");
    Ok(())
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist.
fn load_config(path: &Path) -> Result<AlertgenConfig, EngineError> {
    if path.exists() {
        Ok(AlertgenConfig::from_file(path)?)
    } else {
        Ok(AlertgenConfig::default())
    }
}

/// Seeded RNG when a seed is configured, OS entropy otherwise.
fn rng_for(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
