use tracing_subscriber::EnvFilter;

/// Loads `.env.local`/`.env` and installs a stderr subscriber filtered by `RUST_LOG`.
pub fn init() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
