use serde::{Deserialize, Deserializer, Serialize};

/// Uniform wrapper around every API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub success: bool,
}

/// Envelope for acknowledgement-only endpoints. `data` may be absent.
pub type Ack = ApiResponse<Option<serde_json::Value>>;

impl<T> ApiResponse<T> {
    /// Server message, or a fallback for envelopes that carry none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}

/// Backend ids are integers while the web client treats them as opaque
/// strings. Accept both and keep the string form.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_without_data() {
        let resp: Ack = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.message_or("done"), "done");
    }

    #[test]
    fn test_message_is_kept() {
        let resp: Ack =
            serde_json::from_str(r#"{"data": null, "message": "Email sent", "success": true}"#)
                .unwrap();
        assert_eq!(resp.message_or("done"), "Email sent");
    }

    #[test]
    fn test_typed_payload_requires_data() {
        let result: Result<ApiResponse<Vec<String>>, _> =
            serde_json::from_str(r#"{"success": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_id_accepts_int_and_string() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "id_string")]
            id: String,
        }

        let a: Row = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let b: Row = serde_json::from_str(r#"{"id": "key_42"}"#).unwrap();
        assert_eq!(a.id, "42");
        assert_eq!(b.id, "key_42");
    }
}
