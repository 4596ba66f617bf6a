//! Dashboard command - account overview.

use anyhow::{Context as _, Result};
use clap::Args;

use super::Context;
use crate::pages::DashboardPage;

#[derive(Args)]
pub struct DashboardCmd;

impl DashboardCmd {
    pub async fn run(&self, ctx: &Context) -> Result<()> {
        let client = ctx.authenticated_client()?;
        let resp = client.get_profile().await.context("Failed to load profile")?;

        println!("{}", DashboardPage::new(Some(&resp.data)));
        Ok(())
    }
}
