use crate::message::{iso8601, Message};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::types::Result;

/// Downloadable snapshot of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExport {
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
    pub messages: Vec<Message>,
}

impl ChatExport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// `chatbot-conversation-YYYY-MM-DD.json`, dated by the export timestamp.
    pub fn file_name(&self) -> String {
        file_name_for(self.timestamp.date_naive())
    }
}

pub fn file_name_for(date: NaiveDate) -> String {
    format!("chatbot-conversation-{}.json", date.format("%Y-%m-%d"))
}
