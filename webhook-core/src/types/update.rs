//! Inbound update envelope.

use serde::{Deserialize, Serialize};

use super::{
    inline_query::{ChosenInlineResult, InlineQuery},
    message::{CallbackQuery, Message},
};
use crate::error::{Result, WebhookError};

/// One notification delivered by the platform to the webhook.
///
/// Unknown fields are ignored; absent sub-objects decode as `None`. The envelope itself is
/// strict (`update_id` must be an integer, sub-objects must be objects or `null`), while leaf
/// fields inside the sub-objects fall back to their defaults when `null` or mistyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_query: Option<InlineQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen_inline_result: Option<ChosenInlineResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
}

impl Update {
    /// Decodes an update from a JSON request body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(WebhookError::Decode)
    }
}
