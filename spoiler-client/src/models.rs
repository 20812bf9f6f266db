use serde::{Deserialize, Serialize};

/// Login credentials for `POST /api/Story/Authentication`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful authentication reply
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(alias = "AccessToken")]
    pub access_token: String,
}

/// Create/edit payload for a story spoiler
///
/// `url` is optional on the service side and may be sent empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub url: String,
}

impl StoryDto {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
        }
    }

    /// Payload with every field empty; the service rejects it with 400.
    pub fn empty() -> Self {
        Self::new("", "", "")
    }
}

/// Acknowledgment returned by create and edit
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponseDto {
    #[serde(alias = "Msg")]
    pub msg: String,
    /// Only present on create replies
    #[serde(default, alias = "StoryId")]
    pub story_id: Option<String>,
}
