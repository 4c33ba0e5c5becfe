/// Initialize tracing for the entire process.
///
/// Reads `RUST_LOG` when set and falls back to `info`. Timestamps are uptime
/// based so message flow between services is easy to follow.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_target(false)
        .init();
}
