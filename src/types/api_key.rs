use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::envelope::id_string;

/// A credential for programmatic API access.
///
/// `key` is the secret value AI assistants pass to the memory endpoints.
/// It is only shown in full right after creation; listings should mask it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl ApiKey {
    /// Key with everything but the first 8 characters hidden.
    pub fn masked(&self) -> String {
        let visible: String = self.key.chars().take(8).collect();
        if visible.len() == self.key.len() {
            return visible;
        }
        format!("{}...", visible)
    }
}

#[derive(Debug, Serialize)]
pub struct CreateApiKeyRequest<'a> {
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str) -> ApiKey {
        ApiKey {
            id: "1".to_string(),
            name: "ci-key".to_string(),
            key: value.to_string(),
            last_used: None,
            created_at: Utc::now(),
            is_active: true,
        }
    }

    #[test]
    fn test_masked() {
        assert_eq!(key("ajm_1234567890abcdef").masked(), "ajm_1234...");
        assert_eq!(key("short").masked(), "short");
    }

    #[test]
    fn test_decode_without_last_used() {
        let json = r#"{
            "id": 3,
            "name": "laptop",
            "key": "ajm_abc",
            "created_at": "2025-01-01T00:00:00Z",
            "is_active": false
        }"#;
        let key: ApiKey = serde_json::from_str(json).unwrap();
        assert_eq!(key.id, "3");
        assert!(key.last_used.is_none());
        assert!(!key.is_active);
    }
}
