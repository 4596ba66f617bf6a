use serde::{Deserialize, Serialize};

use super::SubscriptionTier;

/// Current plan state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionInfo {
    pub tier: SubscriptionTier,
    pub usage: u64,
    pub limit: u64,
}

impl SubscriptionInfo {
    /// Usage as a percentage of the limit. Zero limits report 0.
    pub fn usage_percent(&self) -> f64 {
        if self.limit == 0 {
            return 0.0;
        }
        self.usage as f64 / self.limit as f64 * 100.0
    }
}

/// Tiers a checkout session can be opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaidTier {
    Pro,
    Enterprise,
}

#[derive(Debug, Serialize)]
pub struct CheckoutRequest {
    pub tier: PaidTier,
}

/// Payment-provider session; `checkout_url` is the redirect target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub checkout_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_percent() {
        let info = SubscriptionInfo {
            tier: SubscriptionTier::Free,
            usage: 89,
            limit: 100,
        };
        assert!((info.usage_percent() - 89.0).abs() < f64::EPSILON);

        let unlimited = SubscriptionInfo {
            tier: SubscriptionTier::Enterprise,
            usage: 5,
            limit: 0,
        };
        assert_eq!(unlimited.usage_percent(), 0.0);
    }

    #[test]
    fn test_checkout_request_body() {
        let body = serde_json::to_value(CheckoutRequest {
            tier: PaidTier::Enterprise,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "tier": "enterprise" }));
    }
}
