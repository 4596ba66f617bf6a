use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::envelope::id_string;

/// Plan level gating usage limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Pro,
    Enterprise,
}

impl SubscriptionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Pro => "pro",
            SubscriptionTier::Enterprise => "enterprise",
        }
    }

    pub fn is_paid(&self) -> bool {
        !matches!(self, SubscriptionTier::Free)
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubscriptionTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(SubscriptionTier::Free),
            "pro" => Ok(SubscriptionTier::Pro),
            "enterprise" => Ok(SubscriptionTier::Enterprise),
            _ => Err(format!("unknown subscription tier: {}", s)),
        }
    }
}

/// An authenticated account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub subscription_tier: SubscriptionTier,
    pub api_calls_used: u64,
    pub api_calls_limit: u64,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name to greet the user with: display name, falling back to email.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.email)
    }
}

/// Result of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub token: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
}

/// Partial profile update. Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json() -> &'static str {
        r#"{
            "id": 7,
            "email": "ada@example.com",
            "subscription_tier": "pro",
            "api_calls_used": 89,
            "api_calls_limit": 1000,
            "created_at": "2025-03-01T12:00:00Z"
        }"#
    }

    #[test]
    fn test_user_decodes_backend_shape() {
        let user: User = serde_json::from_str(user_json()).unwrap();
        assert_eq!(user.id, "7");
        assert_eq!(user.subscription_tier, SubscriptionTier::Pro);
        assert!(user.name.is_none());
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn test_display_name_prefers_name() {
        let mut user: User = serde_json::from_str(user_json()).unwrap();
        user.name = Some("Ada".to_string());
        assert_eq!(user.display_name(), "Ada");

        user.name = Some(String::new());
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("Free".parse::<SubscriptionTier>(), Ok(SubscriptionTier::Free));
        assert_eq!(
            "enterprise".parse::<SubscriptionTier>(),
            Ok(SubscriptionTier::Enterprise)
        );
        assert!("gold".parse::<SubscriptionTier>().is_err());
        assert!(!SubscriptionTier::Free.is_paid());
        assert!(SubscriptionTier::Pro.is_paid());
    }

    #[test]
    fn test_profile_update_skips_unset() {
        let update = ProfileUpdate {
            name: Some("Ada".to_string()),
            email: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Ada" }));
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn test_change_password_field_names() {
        let req = ChangePasswordRequest {
            current_password: "old",
            new_password: "new",
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["current_password"], "old");
        assert_eq!(json["new_password"], "new");
    }
}
