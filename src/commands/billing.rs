//! Subscription and upgrade commands - plan state and checkout.

use anyhow::{Context as _, Result};
use clap::Args;

use super::Context;
use crate::types::PaidTier;

#[derive(Args)]
pub struct SubscriptionCmd;

impl SubscriptionCmd {
    pub async fn run(&self, ctx: &Context) -> Result<()> {
        let client = ctx.authenticated_client()?;
        let resp = client
            .get_subscription()
            .await
            .context("Failed to load subscription")?;
        let info = resp.data;

        println!("Plan:   {}", info.tier);
        println!(
            "Usage:  {}/{} ({:.1}%)",
            info.usage,
            info.limit,
            info.usage_percent()
        );
        if !info.tier.is_paid() {
            println!();
            println!("Need more? Run `ajimemo upgrade pro`.");
        }
        Ok(())
    }
}

#[derive(Args)]
pub struct UpgradeCmd {
    /// Plan to upgrade to
    #[arg(value_enum)]
    pub tier: PaidTier,
}

impl UpgradeCmd {
    pub async fn run(&self, ctx: &Context) -> Result<()> {
        let client = ctx.authenticated_client()?;
        let resp = client
            .create_checkout_session(self.tier)
            .await
            .context("Failed to start checkout")?;

        println!("Complete your purchase at:");
        println!();
        println!("  {}", resp.data.checkout_url);
        Ok(())
    }
}
