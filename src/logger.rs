//! Logger setup with tracing.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the given binary name and
/// default level are used, with request tracing from tower-http enabled.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let target = bin_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{target}={default_level},stagedoor={default_level},tower_http={default_level}"
        ))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
