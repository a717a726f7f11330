//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::PokedexConfig;
use crate::error::{AppError, AppResult};

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
///
/// # Errors
/// Returns a config error if the filter is malformed or a global subscriber
/// is already installed.
pub fn init_tracing(config: &PokedexConfig) -> AppResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| AppError::config(format!("invalid log level {:?}: {}", config.log_level, e)))?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| AppError::config(format!("tracing already initialised: {}", e)))?;

    tracing::debug!(level = %config.log_level, "tracing initialised");
    Ok(())
}
