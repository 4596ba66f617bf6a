//! Keys command - manage API keys used by AI assistants.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::Context;

#[derive(Args)]
pub struct KeysCmd {
    #[command(subcommand)]
    pub command: KeysSubCmd,
}

#[derive(Subcommand)]
pub enum KeysSubCmd {
    /// List API keys
    List(ListKeysCmd),

    /// Create a new API key
    Create(CreateKeyCmd),

    /// Delete an API key
    Delete(DeleteKeyCmd),
}

#[derive(Args)]
pub struct ListKeysCmd {
    /// Print full key values instead of masking them
    #[arg(long)]
    pub show_secrets: bool,
}

#[derive(Args)]
pub struct CreateKeyCmd {
    /// Human-readable name (e.g., "ci-key", "laptop")
    pub name: String,
}

#[derive(Args)]
pub struct DeleteKeyCmd {
    /// Key id (see `ajimemo keys list`)
    pub id: String,
}

impl KeysCmd {
    pub async fn run(&self, ctx: &Context) -> Result<()> {
        let client = ctx.authenticated_client()?;

        match &self.command {
            KeysSubCmd::List(cmd) => {
                let resp = client.get_api_keys().await.context("Failed to list API keys")?;
                let keys = resp.data;

                if keys.is_empty() {
                    println!("No API keys yet. Create one with `ajimemo keys create <name>`.");
                    return Ok(());
                }

                for key in &keys {
                    let value = if cmd.show_secrets {
                        key.key.clone()
                    } else {
                        key.masked()
                    };
                    let last_used = key
                        .last_used
                        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "never".to_string());
                    let status = if key.is_active { "" } else { " [inactive]" };

                    println!("{:<6} {:<20} {}{}", key.id, key.name, value, status);
                    println!(
                        "       created {}, last used {}",
                        key.created_at.format("%Y-%m-%d"),
                        last_used
                    );
                }

                println!("\n{} keys", keys.len());
            }
            KeysSubCmd::Create(cmd) => {
                let resp = client
                    .create_api_key(&cmd.name)
                    .await
                    .context("Failed to create API key")?;
                let key = resp.data;

                println!("Created API key '{}' (id {}).", key.name, key.id);
                println!();
                println!("  {}", key.key);
                println!();
                println!("Store it now; it will be masked in listings.");
            }
            KeysSubCmd::Delete(cmd) => {
                let resp = client
                    .delete_api_key(&cmd.id)
                    .await
                    .context("Failed to delete API key")?;
                println!("{}", resp.message_or("API key deleted."));
            }
        }
        Ok(())
    }
}
