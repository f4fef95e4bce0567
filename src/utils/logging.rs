use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::{Error, Result};

/// Initializes the global tracing subscriber. Only the CLI layer logs; the
/// analysis core stays silent.
pub fn setup_logging(level: &str, show_timestamps: bool, use_color: bool) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| Error::validation(format!("Invalid log filter: {}", e)))?;

    let result = if show_timestamps {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_ansi(use_color))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(use_color)
                    .without_time(),
            )
            .try_init()
    };

    result.map_err(|e| Error::validation(format!("Failed to initialize logging: {}", e)))
}
