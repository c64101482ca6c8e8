use crate::config::Config;
use crate::error::TransportError;
use domain::transport::{ChatReply, ChatTransport, StoryReply, StoryRequest, StoryTransport};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::types::Result;
use std::sync::Arc;
use tracing::debug;

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// HTTP client for the marketplace chat and story endpoints.
#[derive(Clone)]
pub struct MarketplaceClient {
    client: Arc<Client>,
    base_url: String,
    chat_path: String,
    story_path: String,
}

impl MarketplaceClient {
    pub fn new(config: &Config) -> Self {
        Self::with_paths(&config.base_url, &config.chat_path, &config.story_path)
    }

    pub fn with_paths(base_url: &str, chat_path: &str, story_path: &str) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            chat_path: chat_path.to_string(),
            story_path: story_path.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> std::result::Result<R, TransportError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl ChatTransport for MarketplaceClient {
    async fn send(&self, text: &str) -> Result<ChatReply> {
        let reply = self
            .post_json(&self.chat_path, &ChatRequest { message: text })
            .await?;
        Ok(reply)
    }
}

impl StoryTransport for MarketplaceClient {
    async fn generate_story(&self, request: &StoryRequest) -> Result<StoryReply> {
        let reply = self.post_json(&self.story_path, request).await?;
        Ok(reply)
    }
}
