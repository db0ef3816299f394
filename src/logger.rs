use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. RUST_LOG overrides the default
/// level; calling twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
