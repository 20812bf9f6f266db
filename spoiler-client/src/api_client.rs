use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::models::{AuthResponse, Credentials, StoryDto};

const AUTHENTICATION_PATH: &str = "/api/Story/Authentication";
const CREATE_PATH: &str = "/api/Story/Create";
const EDIT_PATH: &str = "/api/Story/Edit";
const ALL_PATH: &str = "/api/Story/All";
const DELETE_PATH: &str = "/api/Story/Delete";

/// Raw answer from the story-spoiler service
///
/// Story operations never judge the status code; callers decide what
/// they expected.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: String,
}

impl ApiReply {
    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .with_context(|| format!("Failed to parse response JSON: {}", self.body))
    }

    pub fn contains(&self, text: &str) -> bool {
        self.body.contains(text)
    }
}

/// HTTP client for the story-spoiler API
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    /// Create an unauthenticated client
    ///
    /// `timeout` of `None` keeps reqwest's default (no overall timeout).
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: None,
        })
    }

    /// Attach a bearer token sent on every subsequent request
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Authenticate once with a throwaway client and return a client that
    /// carries the resulting bearer token.
    pub async fn login(
        base_url: &str,
        timeout: Option<Duration>,
        credentials: &Credentials,
    ) -> Result<Self> {
        let login_client = Self::new(base_url, timeout)?;
        let token = login_client.authenticate(credentials).await?;
        tracing::info!("🔑 Authenticated as {}", credentials.username);

        Ok(Self::new(base_url, timeout)?.with_access_token(token))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Exchange credentials for an access token
    ///
    /// # Returns
    /// * `Ok(token)` - non-empty `accessToken` from the reply
    /// * `Err(_)` - non-2xx status, undecodable body, or missing/empty token
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<String> {
        let url = self.url(AUTHENTICATION_PATH);
        tracing::debug!("Authenticating against {}", url);

        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .context("Failed to send authentication request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read authentication response")?;

        if !status.is_success() {
            tracing::error!("❌ Authentication failed with status {}", status);
            anyhow::bail!("Authentication failed with status {}: {}", status, body);
        }

        let auth: AuthResponse = serde_json::from_str(&body)
            .context("Authentication response has no accessToken field")?;
        if auth.access_token.is_empty() {
            anyhow::bail!("Authentication response contains an empty accessToken");
        }

        Ok(auth.access_token)
    }

    /// `POST /api/Story/Create`
    pub async fn create_story(&self, story: &StoryDto) -> Result<ApiReply> {
        let url = self.url(CREATE_PATH);
        let request = self.client.post(&url).json(story);
        self.execute(request, "create").await
    }

    /// `PUT /api/Story/Edit?{id_param}={story_id}`
    ///
    /// The query parameter name is the caller's choice; the service keys
    /// edits on `storyId`.
    pub async fn edit_story(
        &self,
        id_param: &str,
        story_id: &str,
        story: &StoryDto,
    ) -> Result<ApiReply> {
        let url = self.url(EDIT_PATH);
        let request = self
            .client
            .put(&url)
            .query(&[(id_param, story_id)])
            .json(story);
        self.execute(request, "edit").await
    }

    /// `GET /api/Story/All`
    pub async fn list_stories(&self) -> Result<ApiReply> {
        let url = self.url(ALL_PATH);
        let request = self.client.get(&url);
        self.execute(request, "list").await
    }

    /// `DELETE /api/Story/Delete/{story_id}`
    pub async fn delete_story(&self, story_id: &str) -> Result<ApiReply> {
        let url = format!(
            "{}/{}",
            self.url(DELETE_PATH),
            urlencoding::encode(story_id)
        );
        let request = self.client.delete(&url);
        self.execute(request, "delete").await
    }

    /// `DELETE /api/Story/Delete?{id_param}={story_id}`
    pub async fn delete_story_by_query(&self, id_param: &str, story_id: &str) -> Result<ApiReply> {
        let url = self.url(DELETE_PATH);
        let request = self.client.delete(&url).query(&[(id_param, story_id)]);
        self.execute(request, "delete").await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: RequestBuilder, operation: &str) -> Result<ApiReply> {
        let request = match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send {} request", operation))?;

        let status = response.status();
        tracing::debug!("📡 {} {} -> {}", operation, response.url(), status);

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read {} response body", operation))?;
        tracing::debug!("📦 {} response body: {}", operation, body);

        Ok(ApiReply { status, body })
    }
}
