use tracing_subscriber::{fmt, EnvFilter};

/// Installs the stderr subscriber. `RUST_LOG` overrides the default `info` level,
/// e.g. `RUST_LOG=fleetview=debug` to see every backend request.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}
