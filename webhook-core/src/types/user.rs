//! User identity type.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Sender of a message or inline query. Missing, `null`, or mistyped fields decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub is_bot: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub username: String,
}

impl User {
    /// Username when set, otherwise first name.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.first_name
        } else {
            &self.username
        }
    }

    /// True when the sender object carried no usable field (e.g. `"from": {}`).
    pub fn is_empty(&self) -> bool {
        *self == User::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_username() {
        let user = User {
            id: 1,
            first_name: "Alice".to_string(),
            username: "alice".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "alice");
    }

    #[test]
    fn test_display_name_falls_back_to_first_name() {
        let user = User {
            id: 2,
            first_name: "Bob".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "Bob");
    }

    #[test]
    fn test_is_empty() {
        assert!(User::default().is_empty());
        let user: User = serde_json::from_str("{}").unwrap();
        assert!(user.is_empty());
        let user: User = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert!(!user.is_empty());
    }

    #[test]
    fn test_null_username_falls_back_to_first_name() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"first_name":"Bob","username":null,"is_bot":"no"}"#)
                .unwrap();
        assert_eq!(user.username, "");
        assert!(!user.is_bot);
        assert_eq!(user.display_name(), "Bob");
    }
}
