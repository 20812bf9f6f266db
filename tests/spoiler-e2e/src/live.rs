//! Live run against the real story-spoiler service
//!
//! Needs SPOILER_USERNAME/SPOILER_PASSWORD in the environment or `.env`.
//!
//! Run with: cargo test -p spoiler-e2e live -- --ignored

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use spoiler_client::{ApiClient, Config};

    use crate::suite::SpoilerSuite;

    async fn login() -> Result<(Config, ApiClient)> {
        let config = Config::from_env()?;
        config.validate()?;
        let client =
            ApiClient::login(&config.base_url, config.request_timeout, &config.credentials())
                .await?;
        Ok((config, client))
    }

    #[tokio::test]
    #[ignore = "requires live service credentials"]
    async fn test_live_authentication_returns_token() -> Result<()> {
        let config = Config::from_env()?;
        let client = ApiClient::new(&config.base_url, config.request_timeout)?;

        let token = client.authenticate(&config.credentials()).await?;
        assert!(!token.is_empty());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires live service credentials"]
    async fn test_live_suite() -> Result<()> {
        let (config, client) = login().await?;

        let mut suite = SpoilerSuite::new(client, config.missing_story_id);
        let report = suite.run().await;
        println!("{}", report);

        assert!(report.is_success(), "{}", report);
        suite.teardown();

        Ok(())
    }
}
