//! Inline query types.

use serde::{Deserialize, Serialize};

use super::{lenient, user::User};

/// Geographic position attached to an inline query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "lenient::float")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "lenient::float")]
    pub longitude: f64,
}

/// Inline-search request typed by a user in the chat client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineQuery {
    /// Query identifier. Integer ids on the wire are accepted and kept as their decimal string.
    #[serde(default, deserialize_with = "lenient::string_or_int")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<User>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub query: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub offset: String,
    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Location>,
}

impl InlineQuery {
    /// Sender, if the query carries a non-empty `from` object.
    pub fn sender(&self) -> Option<&User> {
        self.from.as_ref().filter(|u| !u.is_empty())
    }
}

/// Inline result the user picked. Decoded but never acted upon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    #[serde(default, deserialize_with = "lenient::string")]
    pub result_id: String,
    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<User>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub query: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub inline_message_id: Option<String>,
}
