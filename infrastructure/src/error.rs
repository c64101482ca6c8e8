use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("marketplace returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
