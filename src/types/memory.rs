use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on memories returned by one query.
pub const MAX_QUERY_LIMIT: u32 = 100;

/// Memories returned by a query when no limit is given.
pub const DEFAULT_QUERY_LIMIT: u32 = 10;

/// A memory stored for a user or session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub id: i64,
    pub uid: String,
    pub namespace: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for saving a memory. The server fills in `created_by`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveMemoryRequest {
    pub uid: String,
    pub namespace: String,
    pub text: String,
    pub tags: Vec<String>,
}

impl SaveMemoryRequest {
    /// Memory in the uid's own namespace, matching what the AI endpoints
    /// default to.
    pub fn new(uid: impl Into<String>, text: impl Into<String>) -> Self {
        let uid = uid.into();
        Self {
            namespace: uid.clone(),
            uid,
            text: text.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Filter for querying memories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryQuery {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub tags: Vec<String>,
    /// Full-text search query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl MemoryQuery {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            namespace: None,
            tags: Vec::new(),
            query: None,
            limit: DEFAULT_QUERY_LIMIT,
            offset: 0,
        }
    }

    /// Whether `limit` is within what the server accepts.
    pub fn limit_in_range(&self) -> bool {
        (1..=MAX_QUERY_LIMIT).contains(&self.limit)
    }
}

/// Split a comma-separated tag list, dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("food, pizza,,  "), vec!["food", "pizza"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_save_defaults_namespace_to_uid() {
        let req = SaveMemoryRequest::new("user-1", "likes thin crust");
        assert_eq!(req.namespace, "user-1");

        let req = req.with_namespace("food");
        assert_eq!(req.namespace, "food");
    }

    #[test]
    fn test_query_body_omits_unset_filters() {
        let body = serde_json::to_value(MemoryQuery::new("user-1")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "uid": "user-1", "tags": [], "limit": 10, "offset": 0 })
        );
    }

    #[test]
    fn test_limit_range() {
        let mut q = MemoryQuery::new("u");
        assert!(q.limit_in_range());
        q.limit = 0;
        assert!(!q.limit_in_range());
        q.limit = 101;
        assert!(!q.limit_in_range());
        q.limit = 100;
        assert!(q.limit_in_range());
    }
}
