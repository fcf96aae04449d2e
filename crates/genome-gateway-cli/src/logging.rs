//! Tracing subscriber setup.

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// Install a stderr subscriber filtered by `level`.
///
/// `RUST_LOG`, when set, wins over the level chosen on the command line.
pub fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .map_err(|e| format!("Invalid RUST_LOG '{}': {}", directives, e))?,
        _ => EnvFilter::try_new(level)
            .map_err(|e| format!("Invalid log level '{}': {}", level, e))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    tracing::debug!("Tracing initialized with level: {}", level);

    Ok(())
}
