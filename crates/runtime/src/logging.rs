//! Subscriber setup for applications embedding the tracker.
use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::TrackerConfig;

/// Builds the log filter: `RUST_LOG` if set, otherwise the configured
/// directive.
pub fn env_filter(config: &TrackerConfig) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .with_context(|| format!("invalid log filter `{}`", config.log_filter)),
    }
}

/// Installs a global fmt subscriber. Fails if one is already installed.
pub fn init_logging(config: &TrackerConfig) -> anyhow::Result<()> {
    let filter = env_filter(config)?;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::debug!(
        max_phase_depth = config.tracking.max_phase_depth,
        log_capture_summary = config.tracking.log_capture_summary,
        "tracking logging initialised"
    );
    Ok(())
}
