//! Profile command - show or update the logged-in account.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::Context;
use crate::types::{ProfileUpdate, User};

#[derive(Args)]
pub struct ProfileCmd {
    #[command(subcommand)]
    pub command: Option<ProfileSubCmd>,
}

#[derive(Subcommand)]
pub enum ProfileSubCmd {
    /// Show the current account (default)
    Show,

    /// Update name and/or email
    Update(UpdateProfileCmd),
}

#[derive(Args)]
pub struct UpdateProfileCmd {
    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New email
    #[arg(long)]
    pub email: Option<String>,
}

impl ProfileCmd {
    pub async fn run(&self, ctx: &Context) -> Result<()> {
        let client = ctx.authenticated_client()?;

        match &self.command {
            None | Some(ProfileSubCmd::Show) => {
                let resp = client.get_profile().await.context("Failed to load profile")?;
                print_user(&resp.data);
            }
            Some(ProfileSubCmd::Update(cmd)) => {
                let update = ProfileUpdate {
                    name: cmd.name.clone(),
                    email: cmd.email.clone(),
                };
                if update.is_empty() {
                    anyhow::bail!("Nothing to update. Pass --name and/or --email.");
                }

                let resp = client
                    .update_profile(&update)
                    .await
                    .context("Failed to update profile")?;
                println!("{}", resp.message_or("Profile updated."));
                println!();
                print_user(&resp.data);
            }
        }
        Ok(())
    }
}

fn print_user(user: &User) {
    println!("Email:      {}", user.email);
    println!("Name:       {}", user.name.as_deref().unwrap_or("(not set)"));
    println!("Plan:       {}", user.subscription_tier);
    println!(
        "API calls:  {}/{}",
        user.api_calls_used, user.api_calls_limit
    );
    println!("Member since {}", user.created_at.format("%Y-%m-%d"));
}
