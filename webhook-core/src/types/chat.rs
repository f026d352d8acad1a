//! Chat identity type.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Chat (private, group, or channel) a message was sent in.
///
/// `id` is optional so that a message without a resolvable chat decodes instead of failing.
/// An integer-valued float id (`42.0`) is accepted; any other non-integer id is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub id: Option<i64>,
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub chat_type: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
}
