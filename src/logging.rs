use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber; stdout carries only JSON output.
///
/// The level comes from `RUST_LOG` and defaults to `warn`.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Fails only when a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
