use anyhow::{Context, Result};
use std::sync::Arc;
use tariff_zones::clock::LocalClock;
use tariff_zones::logging::{LogContext, get_logger_with_context, init_logging};
use tariff_zones::web::{self, AppState};
use tariff_zones::{APP_VERSION, Config, TariffClassifier};

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;
    config
        .apply_env_overrides()
        .context("Invalid listen address override")?;
    config.validate().context("Invalid configuration")?;

    init_logging(&config.logging).context("Failed to initialize logging")?;

    let classifier = TariffClassifier::canonical().clone();
    let logger =
        get_logger_with_context(LogContext::new("main").with_policy(classifier.policy().id()));
    logger.info(&format!("Tariff Zones {APP_VERSION} starting up"));

    let state = AppState::new(classifier, Arc::new(LocalClock), config.display.clone());
    if let Err(e) = web::serve(state, &config.web.host, config.web.port).await {
        logger.error(&format!("Web server error: {e}"));
        return Err(e);
    }

    logger.info("Shutdown complete");
    Ok(())
}
