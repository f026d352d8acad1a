//! Message and callback query types.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, lenient, user::User};

/// A chat message. Only `chat.id` is acted upon; the rest is kept for logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "lenient::int")]
    pub message_id: i64,
    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<User>,
    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub chat: Option<Chat>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub date: i64,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
}

impl Message {
    /// Chat id to reply to, if the message carries one.
    pub fn chat_id(&self) -> Option<i64> {
        self.chat.as_ref().and_then(|c| c.id)
    }
}

/// Callback query from an inline keyboard button. Decoded but never acted upon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    #[serde(default, deserialize_with = "lenient::string_or_int")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<User>,
    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<Message>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_id_present() {
        let msg: Message =
            serde_json::from_str(r#"{"message_id":1,"chat":{"id":42,"type":"private"},"text":"hey"}"#)
                .unwrap();
        assert_eq!(msg.chat_id(), Some(42));
        assert_eq!(msg.text.as_deref(), Some("hey"));
    }

    #[test]
    fn test_chat_id_missing() {
        let msg: Message = serde_json::from_str(r#"{"message_id":1}"#).unwrap();
        assert_eq!(msg.chat_id(), None);

        let msg: Message = serde_json::from_str(r#"{"chat":{"type":"group"}}"#).unwrap();
        assert_eq!(msg.chat_id(), None);
    }

    #[test]
    fn test_unusable_chat_id_decodes_as_missing() {
        let msg: Message =
            serde_json::from_str(r#"{"chat":{"id":"42"},"text":"hi"}"#).unwrap();
        assert_eq!(msg.chat_id(), None);
        assert_eq!(msg.text.as_deref(), Some("hi"));

        let msg: Message = serde_json::from_str(r#"{"chat":"42","text":null}"#).unwrap();
        assert!(msg.chat.is_none());
        assert!(msg.text.is_none());
    }

    #[test]
    fn test_float_chat_id_is_accepted() {
        let msg: Message = serde_json::from_str(r#"{"message_id":1.0,"chat":{"id":42.0}}"#).unwrap();
        assert_eq!(msg.message_id, 1);
        assert_eq!(msg.chat_id(), Some(42));
    }
}
