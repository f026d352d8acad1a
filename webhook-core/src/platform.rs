//! Platform abstraction for delivering replies.
//!
//! [`PlatformClient`] is transport-agnostic; the HTTP implementation lives in webhook-bot.
//! Tests substitute a recording implementation.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Ordered form parameters for one platform method call (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormParams(Vec<(String, String)>);

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key/value pair; keys may repeat.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Bot API response envelope. `result` is kept as raw JSON since it differs per method.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
}

/// What the platform answered to one method call.
#[derive(Debug, Clone)]
pub struct PlatformResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
    /// Decoded envelope, when the body is a Bot API envelope.
    pub envelope: Option<ApiEnvelope>,
}

impl PlatformResponse {
    /// Builds a response, decoding the envelope from `body` when possible.
    pub fn new(status: u16, body: String) -> Self {
        let envelope = serde_json::from_str::<ApiEnvelope>(&body).ok();
        Self {
            status,
            body,
            envelope,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Abstraction for calling a platform method. Implementations map to a transport (e.g. the Telegram Bot API over HTTP).
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Submits `params` to the platform method `method` (e.g. `sendMessage`).
    /// Returns `Err` only when no HTTP response was obtained; non-200 responses are `Ok`.
    async fn submit(&self, method: &str, params: &FormParams) -> Result<PlatformResponse>;
}
