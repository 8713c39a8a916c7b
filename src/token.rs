//! # OAuth Token Payload
//!
//! A token is whatever the provider's token endpoint returned: a JSON object
//! mapping string keys to arbitrary values (`access_token`, `token_type`,
//! `scope`, `expires_in`, ...). Storage drivers treat it as opaque; the
//! accessors here are a convenience for callers only.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque OAuth credential payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(Map<String, Value>);

impl Token {
    /// Creates an empty token.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Creates a bearer token holding only `access_token` and `token_type`.
    #[must_use]
    pub fn bearer(access_token: &str) -> Self {
        let mut map = Map::new();
        map.insert("access_token".to_string(), access_token.into());
        map.insert("token_type".to_string(), "Bearer".into());
        Self(map)
    }

    /// Returns the raw value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert<V: Into<Value>>(&mut self, key: &str, value: V) {
        self.0.insert(key.to_string(), value.into());
    }

    /// The `access_token` field, when present and a string.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.0.get("access_token").and_then(Value::as_str)
    }

    /// The `token_type` field, when present and a string.
    #[must_use]
    pub fn token_type(&self) -> Option<&str> {
        self.0.get("token_type").and_then(Value::as_str)
    }

    /// The `scope` field, when present and a string.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.0.get("scope").and_then(Value::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Token {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_fills_access_token_and_type() {
        let token = Token::bearer("s3cr3t");
        assert_eq!(token.access_token(), Some("s3cr3t"));
        assert_eq!(token.token_type(), Some("Bearer"));
        assert_eq!(token.scope(), None);
    }

    #[test]
    fn accessors_ignore_non_string_values() {
        let mut token = Token::new();
        token.insert("access_token", 42);
        assert_eq!(token.access_token(), None);
        assert_eq!(token.get("access_token"), Some(&Value::from(42)));
    }

    #[test]
    fn deserializes_from_provider_response() {
        let token: Token = serde_json::from_str(
            r#"{"access_token":"abc","token_type":"Bearer","scope":"read:user","expires_in":3600}"#,
        )
        .unwrap();
        assert_eq!(token.access_token(), Some("abc"));
        assert_eq!(token.scope(), Some("read:user"));
        assert_eq!(token.get("expires_in"), Some(&Value::from(3600)));
    }
}
