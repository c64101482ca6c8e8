use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One chat line. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self::at(text, sender, now())
    }

    pub fn at(text: impl Into<String>, sender: Sender, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

/// Current time cut to the millisecond precision timestamps are stored with,
/// so a message equals itself after a JSON round trip.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Millisecond-precision `Z` timestamps, e.g. `2024-05-01T10:00:00.000Z`.
pub(crate) mod iso8601 {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
