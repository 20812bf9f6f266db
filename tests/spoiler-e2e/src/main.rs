//! Story Spoiler end-to-end runner
//!
//! Logs in once, runs the ordered create/edit/list/delete suite against the
//! configured service and exits non-zero when any step fails.
//!
//! Usage:
//!   cargo run -p spoiler-e2e       (live run, credentials from env/.env)
//!   cargo test -p spoiler-e2e      (mock-backed tests, no network)

mod live;

use anyhow::{Context, Result};
use spoiler_client::{ApiClient, Config};
use tracing::{error, info};

use suite::SpoilerSuite;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spoiler_e2e=info,spoiler_client=info".into()),
        )
        .init();

    info!("Story Spoiler suite starting...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!("Service: {}", config.base_url);

    let client = ApiClient::login(&config.base_url, config.request_timeout, &config.credentials())
        .await
        .context("Failed to authenticate")?;

    let mut suite = SpoilerSuite::new(client, config.missing_story_id.clone());
    let report = suite.run().await;
    suite.teardown();

    println!("{}", report);

    if !report.is_success() {
        error!("{} of {} steps failed", report.failed(), report.outcomes.len());
        anyhow::bail!("Story Spoiler suite failed");
    }

    Ok(())
}
