use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// Uses `RUST_LOG` if set, otherwise `default_filter`, and plain `info`
/// if neither parses.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
