//! Configuration for the story-spoiler suite
//!
//! Loads configuration from environment variables (and `.env`) with validation.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::models::Credentials;

pub const DEFAULT_BASE_URL: &str = "https://d3s5nxhwblsjbi.cloudfront.net";

/// Identifier the negative edit/delete cases use; no story carries it.
pub const DEFAULT_MISSING_STORY_ID: &str = "2323";

#[derive(Debug, Clone)]
pub struct Config {
    /// Story-spoiler service root, without trailing slash requirements
    pub base_url: String,

    pub username: String,
    pub password: String,

    /// Identifier used by the "non-existing story" cases
    pub missing_story_id: String,

    /// Per-request timeout; `None` keeps the HTTP library default
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Required environment variables:
    /// - SPOILER_USERNAME: Account used to obtain the bearer token
    /// - SPOILER_PASSWORD: Password for that account
    ///
    /// Optional environment variables (with defaults):
    /// - SPOILER_BASE_URL: Service root (default: https://d3s5nxhwblsjbi.cloudfront.net)
    /// - SPOILER_MISSING_STORY_ID: Identifier for negative cases (default: 2323)
    /// - SPOILER_REQUEST_TIMEOUT_SECONDS: Request timeout (default: unset)
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("SPOILER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let username = lookup("SPOILER_USERNAME")
            .context("SPOILER_USERNAME environment variable is required")?;

        let password = lookup("SPOILER_PASSWORD")
            .context("SPOILER_PASSWORD environment variable is required")?;

        let missing_story_id = lookup("SPOILER_MISSING_STORY_ID")
            .unwrap_or_else(|| DEFAULT_MISSING_STORY_ID.to_string());

        let request_timeout = lookup("SPOILER_REQUEST_TIMEOUT_SECONDS")
            .map(|raw| {
                raw.parse::<u64>()
                    .context("SPOILER_REQUEST_TIMEOUT_SECONDS must be a valid number")
            })
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            base_url,
            username,
            password,
            missing_story_id,
            request_timeout,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("Base URL cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("Base URL must start with http:// or https://");
        }

        if self.username.is_empty() {
            anyhow::bail!("Username cannot be empty");
        }

        if self.password.is_empty() {
            anyhow::bail!("Password cannot be empty");
        }

        if self.missing_story_id.is_empty() {
            anyhow::bail!("Missing story id cannot be empty");
        }

        if self.request_timeout == Some(Duration::ZERO) {
            anyhow::bail!("Request timeout must be at least 1 second");
        }

        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}
