use anyhow::{Context, Result};
use soap_note_api::{config, server, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging depends on the configured level, so config comes first and reports to stderr.
    let config = config::load().await.context("Failed to load configuration")?;

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = telemetry::env_filter(rust_log.as_deref(), &config.server.logs.level)?;
    telemetry::init(filter);

    info!(
        provider = config.llm.provider.as_str(),
        model = %config.llm.model,
        api_key_configured = config.llm.api_key.is_some(),
        "Starting SOAP note generator"
    );

    server::run(config).await?;

    Ok(())
}
