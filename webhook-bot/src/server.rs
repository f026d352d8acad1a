//! HTTP surface: `POST /<bot-token>` for updates, a greeting on every other path.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    routing::post,
    Router,
};
use percent_encoding::percent_decode_str;
use tracing::{info, instrument, warn};

use crate::dispatcher::Dispatcher;

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

/// Builds the router. `webhook_path` is `/<bot-token>`.
pub fn router(webhook_path: &str, state: AppState) -> Router {
    Router::new()
        .route(webhook_path, post(handle_update))
        .fallback(greet)
        .with_state(state)
}

/// Plain-text greeting echoing the HTML-escaped, quoted request path.
pub fn greeting(path: &str) -> String {
    format!("Hello, {:?}", htmlescape::encode_minimal(path))
}

/// Greets with the decoded path; invalid UTF-8 sequences become U+FFFD.
async fn greet(uri: Uri) -> String {
    greeting(&percent_decode_str(uri.path()).decode_utf8_lossy())
}

/// Runs one update through the dispatcher. The platform call (if any) completes before the
/// response is returned.
#[instrument(
    name = "webhook.update",
    skip_all,
    fields(body_len = body.len(), outcome = tracing::field::Empty)
)]
async fn handle_update(State(state): State<AppState>, body: Bytes) -> (StatusCode, String) {
    match state.dispatcher.handle_body(&body).await {
        Ok(outcome) => {
            tracing::Span::current().record("outcome", tracing::field::debug(&outcome));
            info!("Update handled");
            (StatusCode::OK, String::new())
        }
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            warn!(status = status.as_u16(), error = %e, "Update rejected");
            (status, e.to_string())
        }
    }
}
