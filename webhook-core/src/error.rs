//! Error types for the webhook core.
//!
//! [`WebhookError`] covers every failure a single update can hit, plus startup errors.
//! [`WebhookError::status_code`] maps each variant to the HTTP status returned to the platform.

use thiserror::Error;

/// Top-level error for the webhook bot (decode, ordering, dispatch, outbound, config, IO).
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Stale update: {update_id} is older than watermark {watermark}")]
    StaleUpdate { update_id: i64, watermark: i64 },

    #[error("Only Inline query are Accepted (update {update_id})")]
    UnsupportedUpdate { update_id: i64 },

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebhookError {
    /// HTTP status the webhook answers with when a request fails with this error.
    ///
    /// `Transport` is never surfaced to the caller; it maps to 500 only for completeness.
    pub fn status_code(&self) -> u16 {
        match self {
            WebhookError::StaleUpdate { .. } => 400,
            WebhookError::UnsupportedUpdate { .. } => 501,
            WebhookError::Decode(_)
            | WebhookError::Serialization(_)
            | WebhookError::Transport(_)
            | WebhookError::Config(_)
            | WebhookError::Io(_) => 500,
        }
    }
}

/// Result type for core operations; uses [`WebhookError`].
pub type Result<T> = std::result::Result<T, WebhookError>;
