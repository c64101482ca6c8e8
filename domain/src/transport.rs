use serde::{Deserialize, Serialize};
use shared::types::Result;

/// Body the chat endpoint answers with: `{success, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatReply {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: Option<&str>) -> Self {
        Self {
            success: false,
            message: message.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRequest {
    pub description: String,
    pub category: String,
}

/// Body the story endpoint answers with: `{success, story?, message?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request/response link to the server-side chat backend.
///
/// An `Err` means the call never produced a usable reply (network, status,
/// or decode failure).
pub trait ChatTransport {
    fn send(&self, text: &str) -> impl std::future::Future<Output = Result<ChatReply>> + Send;
}

pub trait StoryTransport {
    fn generate_story(
        &self,
        request: &StoryRequest,
    ) -> impl std::future::Future<Output = Result<StoryReply>> + Send;
}
