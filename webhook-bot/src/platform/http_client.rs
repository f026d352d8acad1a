//! Posts form-encoded method calls to `<api_url>/bot<token>/<method>` with reqwest.
//! Production code delivers replies through it; tests substitute another PlatformClient impl.

use async_trait::async_trait;
use tracing::{debug, instrument};
use webhook_core::{FormParams, PlatformClient, PlatformResponse, Result, WebhookError};

/// Masks a bot token for logging: first 4 chars + `***` + last 4 chars; short tokens are fully masked.
pub fn mask_token(token: &str) -> String {
    if token.len() <= 11 || !token.is_ascii() {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..4], &token[token.len() - 4..])
    }
}

/// Thin reqwest-based client for the Bot API.
#[derive(Clone)]
pub struct HttpPlatformClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl HttpPlatformClient {
    /// Creates a client for `token` against `api_url` (e.g. `https://api.telegram.org`).
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, token)
    }

    /// Creates a client reusing an existing reqwest client.
    pub fn with_client(
        client: reqwest::Client,
        api_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            api_url,
            token: token.into(),
        }
    }

    /// Full URL for a method call.
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }
}

#[async_trait]
impl PlatformClient for HttpPlatformClient {
    #[instrument(skip(self, params), fields(token = %mask_token(&self.token)))]
    async fn submit(&self, method: &str, params: &FormParams) -> Result<PlatformResponse> {
        let resp = self
            .client
            .post(self.method_url(method))
            .form(params)
            .send()
            .await
            .map_err(|e| WebhookError::Transport(format!("Post to {} failed: {}", method, e)))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| WebhookError::Transport(format!("Reading response failed: {}", e)))?;

        debug!(status, body_len = body.len(), "Platform responded");
        Ok(PlatformResponse::new(status, body))
    }
}
