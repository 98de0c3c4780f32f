use subscriber_stats::config::Config;
use subscriber_stats::server;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config);

    server::run(config).await
}

/// Initializes the tracing subscriber from the loaded configuration.
///
/// `LOG_FORMAT=json` switches to newline-delimited JSON output for log
/// shippers; everything else gets the human-readable format.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
