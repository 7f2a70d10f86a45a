use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::models::Settings;

/// Installs the global subscriber. Logs go to stderr so stdout stays JSON.
/// A second call is a no-op.
pub fn init(settings: &Settings) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&settings.log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
