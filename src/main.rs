use std::sync::Arc;

use anyhow::Result;
use localized_site::config::Config;
use localized_site::server::{self, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("localized_site=info".parse()?),
        )
        .init();

    info!("Starting localized site server");

    let config = Config::from_env()?;
    info!(
        "Default locale: {}, supported: {}",
        config.default_locale,
        config.supported_locales.join(", ")
    );

    server::serve(Arc::new(AppState::new(config))).await
}
