use std::path::Path;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

use orbit_common::error::Result;
use orbit_consensus::Validator;
use orbit_ledger::{ChainLedger, SharedLedger};

use crate::config::{Config, NetworkProfile};

pub const LOG_FILE_NAME: &str = "orbit-node.log";

/// Loads the config, writing the defaults first when the file is missing.
pub fn ensure_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!("⚠️ Config not found. Writing defaults to {}...", path.display());
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Config::default().save_to_file(path)?;
    }
    Config::load_from_file(path)
}

/// Installs the tracing subscriber: stderr filtered by `RUST_LOG` (default
/// `info`), plus a file audit log of ledger events when `log_dir` is set.
///
/// Keep the returned guard alive for the whole process or buffered file
/// output is lost.
pub fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::filter_fn(|metadata| {
                    metadata.target().starts_with("orbit_ledger")
                        || metadata.target().starts_with("orbit_consensus")
                        || metadata.target().starts_with("orbit_mempool")
                }));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        );

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(guard)
}

/// Builds a ledger for `profile` and registers its validators.
pub async fn build_network(config: &Config, profile: &NetworkProfile) -> Result<SharedLedger> {
    let ledger = SharedLedger::new(ChainLedger::new(config.ledger_config(profile))?);
    for spec in &profile.validators {
        ledger.register_validator(Validator::new(spec.name.clone(), spec.stake)).await?;
    }
    info!("🚀 Network {} ready with {} validators", profile.name, profile.validators.len());
    Ok(ledger)
}
