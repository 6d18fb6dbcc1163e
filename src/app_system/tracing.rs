use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global tracing subscriber once for the entire application.
/// `RUST_LOG` controls the filter; the default is `info`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
