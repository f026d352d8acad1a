//! Builds reply payloads and delivers them through the platform client.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, warn};
use webhook_core::{
    FormParams, InlineQuery, InlineQueryResultArticle, PlatformClient, Result, User, WebhookError,
};

pub const METHOD_ANSWER_INLINE_QUERY: &str = "answerInlineQuery";
pub const METHOD_SEND_MESSAGE: &str = "sendMessage";

/// Text sent in reply to every chat message.
pub const MESSAGE_REPLY_TEXT: &str = "I just do this.";

/// Reply text for an inline query: sender's username (or first name) and the query, space-joined.
pub fn reply_text(from: &User, query: &str) -> String {
    format!("{} {}", from.display_name(), query)
}

/// Form body for `sendMessage` to `chat_id`.
pub fn message_reply_form(chat_id: i64) -> FormParams {
    let mut params = FormParams::new();
    params.add("chat_id", chat_id.to_string());
    params.add("text", MESSAGE_REPLY_TEXT);
    params
}

/// Builds inline answers and message replies and submits them.
///
/// Delivery failures are logged and swallowed; they never reach the webhook caller.
pub struct Responder {
    platform: Arc<dyn PlatformClient>,
    answer_seq: AtomicU64,
}

impl Responder {
    pub fn new(platform: Arc<dyn PlatformClient>) -> Self {
        Self {
            platform,
            answer_seq: AtomicU64::new(0),
        }
    }

    /// Number of inline answers built so far.
    pub fn answers_built(&self) -> u64 {
        self.answer_seq.load(Ordering::Relaxed)
    }

    /// Form body for `answerInlineQuery`: one echo article under `results`.
    pub fn inline_answer_form(&self, query: &InlineQuery, from: &User) -> Result<FormParams> {
        let text = reply_text(from, &query.query);
        let article = InlineQueryResultArticle::echo(query.id.clone(), text);
        let seq = self.answer_seq.fetch_add(1, Ordering::Relaxed) + 1;

        let results = serde_json::to_string(&[article]).map_err(|e| {
            error!(error = %e, "json marshal failed");
            WebhookError::Serialization(e)
        })?;

        info!(
            inline_query_id = %query.id,
            user_id = from.id,
            answer_seq = seq,
            "Built inline answer"
        );

        let mut params = FormParams::new();
        params.add("inline_query_id", query.id.clone());
        params.add("is_personal", "true");
        params.add("results", results);
        Ok(params)
    }

    /// Answers an inline query. Errors only when the answer cannot be serialized.
    pub async fn answer_inline_query(&self, query: &InlineQuery, from: &User) -> Result<()> {
        let params = self.inline_answer_form(query, from)?;
        self.deliver(METHOD_ANSWER_INLINE_QUERY, &params).await;
        Ok(())
    }

    /// Sends the fixed reply to `chat_id`.
    pub async fn reply_to_message(&self, chat_id: i64) {
        info!(chat_id, "Replying to message");
        let params = message_reply_form(chat_id);
        self.deliver(METHOD_SEND_MESSAGE, &params).await;
    }

    /// Submits one method call and logs the outcome. Never retries.
    async fn deliver(&self, method: &str, params: &FormParams) {
        match self.platform.submit(method, params).await {
            Ok(resp) if resp.is_success() => {
                info!(method = %method, "Delivered");
            }
            Ok(resp) => {
                let description = resp
                    .envelope
                    .as_ref()
                    .and_then(|env| env.description.clone())
                    .unwrap_or_default();
                warn!(
                    method = %method,
                    status = resp.status,
                    description = %description,
                    params = ?params,
                    body = %resp.body,
                    "Unexpected platform response"
                );
            }
            Err(e) => {
                error!(method = %method, error = %e, "Post to platform failed");
            }
        }
    }
}
