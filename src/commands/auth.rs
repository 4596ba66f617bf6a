//! Login, register and logout commands - manage the stored session.

use anyhow::{Context as _, Result};
use clap::Args;

use super::Context;
use crate::ui::{LogoSize, LogoText};

#[derive(Args)]
pub struct LoginCmd {
    /// Account email
    pub email: String,

    /// Account password
    #[arg(long, env = "AJIMEMO_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl LoginCmd {
    pub async fn run(&self, ctx: &Context) -> Result<()> {
        let client = ctx.client()?;
        let resp = client
            .login(&self.email, &self.password)
            .await
            .context("Login failed")?;

        client.set_auth(&resp.data.token)?;
        println!(
            "Logged in to {} as {}.",
            LogoText::new(LogoSize::Sm),
            resp.data.user.display_name()
        );
        Ok(())
    }
}

#[derive(Args)]
pub struct RegisterCmd {
    /// Account email
    pub email: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Account password
    #[arg(long, env = "AJIMEMO_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl RegisterCmd {
    pub async fn run(&self, ctx: &Context) -> Result<()> {
        let client = ctx.client()?;
        let resp = client
            .register(&self.email, &self.password, &self.name)
            .await
            .context("Registration failed")?;

        client.set_auth(&resp.data.token)?;
        println!(
            "Account created. Logged in as {} ({} plan).",
            resp.data.user.display_name(),
            resp.data.user.subscription_tier
        );
        Ok(())
    }
}

#[derive(Args)]
pub struct LogoutCmd;

impl LogoutCmd {
    pub async fn run(&self, ctx: &Context) -> Result<()> {
        let client = ctx.client()?;
        let was_logged_in = client.session().is_authenticated()?;
        client.clear_auth()?;

        if was_logged_in {
            println!("Logged out.");
        } else {
            println!("Not logged in.");
        }
        Ok(())
    }
}
