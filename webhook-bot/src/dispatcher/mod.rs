//! Update dispatcher: decode, ordering check, branch selection, reply.
//!
//! One request in, at most one platform call out. Branches are checked in a fixed order:
//! inline query, then message, then unsupported.

mod responder;
mod watermark;

pub use responder::{
    message_reply_form, reply_text, Responder, MESSAGE_REPLY_TEXT, METHOD_ANSWER_INLINE_QUERY,
    METHOD_SEND_MESSAGE,
};
pub use watermark::Watermark;

use std::sync::Arc;

use tracing::{debug, info, warn};
use webhook_core::{PlatformClient, Result, Update, WebhookError};

/// What the dispatcher did with an accepted update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Inline answer built and submitted.
    AnsweredInlineQuery,
    /// Inline query without a usable sender; nothing sent.
    InlineQueryWithoutSender,
    /// Fixed reply submitted to the message's chat.
    RepliedToMessage,
    /// Message without a chat id; nothing sent.
    MessageWithoutChat,
}

/// Owns the watermark and the responder; shared across requests through `Arc`.
pub struct Dispatcher {
    watermark: Watermark,
    responder: Responder,
}

impl Dispatcher {
    pub fn new(platform: Arc<dyn PlatformClient>) -> Self {
        Self::with_watermark(platform, Watermark::new())
    }

    pub fn with_watermark(platform: Arc<dyn PlatformClient>, watermark: Watermark) -> Self {
        Self {
            watermark,
            responder: Responder::new(platform),
        }
    }

    /// Current watermark (last accepted update id).
    pub fn watermark(&self) -> i64 {
        self.watermark.get()
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    /// Decodes a JSON request body and dispatches it. Decode failures leave the watermark untouched.
    pub async fn handle_body(&self, body: &[u8]) -> Result<DispatchOutcome> {
        let update = Update::from_slice(body)?;
        self.dispatch(&update).await
    }

    /// Checks ordering, advances the watermark, then runs exactly one branch.
    pub async fn dispatch(&self, update: &Update) -> Result<DispatchOutcome> {
        let previous = self.watermark.advance(update.update_id)?;
        debug!(update_id = update.update_id, previous, "Watermark advanced");

        if let Some(query) = &update.inline_query {
            let Some(from) = query.sender() else {
                info!(inline_query_id = %query.id, "Inline query without sender; ignoring");
                return Ok(DispatchOutcome::InlineQueryWithoutSender);
            };
            info!(
                inline_query_id = %query.id,
                user_id = from.id,
                query = %query.query,
                "Received inline query"
            );
            self.responder.answer_inline_query(query, from).await?;
            return Ok(DispatchOutcome::AnsweredInlineQuery);
        }

        if let Some(message) = &update.message {
            return match message.chat_id() {
                Some(chat_id) => {
                    self.responder.reply_to_message(chat_id).await;
                    Ok(DispatchOutcome::RepliedToMessage)
                }
                None => {
                    info!(message_id = message.message_id, "Message without chat id; ignoring");
                    Ok(DispatchOutcome::MessageWithoutChat)
                }
            };
        }

        warn!(update = ?update, "Unfulfilled update");
        Err(WebhookError::UnsupportedUpdate {
            update_id: update.update_id,
        })
    }
}
