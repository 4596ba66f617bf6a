//! Config command - manage local configuration.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::{FileTokenStore, TokenStore};
use crate::local::LocalConfig;

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub command: ConfigSubCmd,
}

#[derive(Subcommand)]
pub enum ConfigSubCmd {
    /// Set the API base URL (default: http://localhost:8000)
    SetUrl(SetUrlCmd),

    /// Set the request timeout in seconds (default: 10)
    SetTimeout(SetTimeoutCmd),

    /// Set the default uid for memory commands
    SetUid(SetUidCmd),

    /// Set the default namespace for memory commands
    SetNamespace(SetNamespaceCmd),

    /// Show current configuration
    Show,
}

#[derive(Args)]
pub struct SetUrlCmd {
    /// API base URL (e.g., https://api.ajimemo.com)
    pub url: String,
}

#[derive(Args)]
pub struct SetTimeoutCmd {
    /// Timeout in seconds
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub seconds: u64,
}

#[derive(Args)]
pub struct SetUidCmd {
    /// User or session identifier
    pub uid: String,
}

#[derive(Args)]
pub struct SetNamespaceCmd {
    /// Memory namespace
    pub namespace: String,
}

impl ConfigCmd {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            ConfigSubCmd::SetUrl(cmd) => {
                url::Url::parse(&cmd.url)
                    .map_err(|e| anyhow::anyhow!("Invalid URL '{}': {}", cmd.url, e))?;
                let mut config = LocalConfig::load()?;
                config.api_url = cmd.url.clone();
                config.save()?;
                println!("API URL set to: {}", cmd.url);
            }
            ConfigSubCmd::SetTimeout(cmd) => {
                let mut config = LocalConfig::load()?;
                config.timeout_secs = cmd.seconds;
                config.save()?;
                println!("Timeout set to: {}s", cmd.seconds);
            }
            ConfigSubCmd::SetUid(cmd) => {
                let mut config = LocalConfig::load()?;
                config.default_uid = Some(cmd.uid.clone());
                config.save()?;
                println!("Default uid set to: {}", cmd.uid);
            }
            ConfigSubCmd::SetNamespace(cmd) => {
                let mut config = LocalConfig::load()?;
                config.default_namespace = Some(cmd.namespace.clone());
                config.save()?;
                println!("Default namespace set to: {}", cmd.namespace);
            }
            ConfigSubCmd::Show => {
                let config = LocalConfig::load()?;
                let logged_in = FileTokenStore::new(LocalConfig::token_path()?)
                    .load()?
                    .is_some();

                println!("Config: {}", LocalConfig::config_path()?.display());
                println!();
                println!("api_url:    {}", config.api_url);
                println!("timeout:    {}s", config.timeout_secs);
                println!(
                    "uid:        {}",
                    config.default_uid.as_deref().unwrap_or("(not set)")
                );
                println!(
                    "namespace:  {}",
                    config.default_namespace.as_deref().unwrap_or("(not set)")
                );
                println!(
                    "session:    {}",
                    if logged_in { "(logged in)" } else { "(not logged in)" }
                );
            }
        }
        Ok(())
    }
}
