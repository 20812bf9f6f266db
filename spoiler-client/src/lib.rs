//! Story Spoiler API client
//!
//! Thin HTTP client for the story-spoiler service: bearer authentication,
//! story create/edit/list/delete, and environment-driven configuration.
//! It reports what the service answered and leaves judging the answer to
//! the caller.

pub mod api_client;
pub mod config;
pub mod models;

pub use api_client::{ApiClient, ApiReply};
pub use config::Config;
pub use models::{ApiResponseDto, AuthResponse, Credentials, StoryDto};
