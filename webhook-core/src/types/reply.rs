//! Inline answer payload offered back to the platform.

use serde::{Deserialize, Serialize};

/// Text content sent to the chat when the user picks an inline result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTextMessageContent {
    pub message_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(default)]
    pub disable_web_page_preview: bool,
}

/// Inline query result of type `article`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineQueryResultArticle {
    /// Always `"article"`.
    #[serde(rename = "type")]
    pub result_type: String,
    pub id: String,
    pub title: String,
    pub input_message_content: InputTextMessageContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

impl InlineQueryResultArticle {
    pub const TYPE: &'static str = "article";

    /// Article whose title and message text are both `text`.
    pub fn echo(id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            result_type: Self::TYPE.to_string(),
            id: id.into(),
            title: text.clone(),
            input_message_content: InputTextMessageContent {
                message_text: text,
                ..Default::default()
            },
            description: None,
            thumb_url: None,
        }
    }
}
