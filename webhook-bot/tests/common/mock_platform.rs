//! Mock implementation of [`webhook_bot::PlatformClient`] for integration tests.
//!
//! Records every `submit` call so tests can assert on the method and form body without
//! hitting the platform.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use webhook_bot::{FormParams, PlatformClient, PlatformResponse, Result, WebhookError};

/// One recorded call to `submit(method, params)`.
#[derive(Debug, Clone)]
pub struct SubmitRecord {
    pub method: String,
    pub params: FormParams,
}

/// How the mock answers each call.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Ok,
    Status(u16),
    TransportError,
}

/// Mock platform that records calls and answers with a fixed [`Reply`].
pub struct MockPlatform {
    reply: Reply,
    calls: Mutex<Vec<SubmitRecord>>,
}

impl MockPlatform {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn ok() -> Arc<Self> {
        Self::new(Reply::Ok)
    }

    pub fn calls(&self) -> Vec<SubmitRecord> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformClient for MockPlatform {
    async fn submit(&self, method: &str, params: &FormParams) -> Result<PlatformResponse> {
        self.calls.lock().unwrap().push(SubmitRecord {
            method: method.to_string(),
            params: params.clone(),
        });
        match self.reply {
            Reply::Ok => Ok(PlatformResponse::new(
                200,
                r#"{"ok":true,"result":true}"#.to_string(),
            )),
            Reply::Status(status) => Ok(PlatformResponse::new(
                status,
                format!(r#"{{"ok":false,"error_code":{},"description":"mock"}}"#, status),
            )),
            Reply::TransportError => Err(WebhookError::Transport("connection refused".to_string())),
        }
    }
}
