use std::io::stderr;

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global subscriber logging to stderr at `level`
///
/// `RUST_LOG` takes precedence over `level` when set. Logs go to stderr so
/// they never interleave with the board drawn on stdout.
pub fn init_logging(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(stderr)
        .finish();

    // ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
