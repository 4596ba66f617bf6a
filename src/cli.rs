//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{
    AboutCmd, ConfigCmd, Context, DashboardCmd, KeysCmd, LoginCmd, LogoutCmd, MemoryCmd,
    PasswordCmd, ProfileCmd, RegisterCmd, SubscriptionCmd, UpgradeCmd,
};

#[derive(Parser)]
#[command(name = "ajimemo")]
#[command(about = "AjiMemo - long-term memory for your AI assistants")]
#[command(version)]
pub struct Cli {
    /// API base URL (overrides the config file)
    #[arg(long, global = true, env = "AJIMEMO_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log in and store the session token
    Login(LoginCmd),

    /// Create an account and log in
    Register(RegisterCmd),

    /// Forget the stored session token
    Logout(LogoutCmd),

    /// Reset or change your password
    Password(PasswordCmd),

    /// Show or update your profile
    Profile(ProfileCmd),

    /// Account overview
    Dashboard(DashboardCmd),

    /// Manage API keys
    Keys(KeysCmd),

    /// Show plan and usage
    Subscription(SubscriptionCmd),

    /// Start checkout for a paid plan
    Upgrade(UpgradeCmd),

    /// Save and search memories
    Memory(MemoryCmd),

    /// Manage configuration (API URL, defaults)
    Config(ConfigCmd),

    /// What AjiMemo is
    About(AboutCmd),
}

impl Cli {
    pub fn context(&self) -> Context {
        Context {
            api_url: self.api_url.clone(),
        }
    }
}

impl Command {
    pub async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        match self {
            Command::Login(cmd) => cmd.run(ctx).await,
            Command::Register(cmd) => cmd.run(ctx).await,
            Command::Logout(cmd) => cmd.run(ctx).await,
            Command::Password(cmd) => cmd.run(ctx).await,
            Command::Profile(cmd) => cmd.run(ctx).await,
            Command::Dashboard(cmd) => cmd.run(ctx).await,
            Command::Keys(cmd) => cmd.run(ctx).await,
            Command::Subscription(cmd) => cmd.run(ctx).await,
            Command::Upgrade(cmd) => cmd.run(ctx).await,
            Command::Memory(cmd) => cmd.run(ctx).await,
            Command::Config(cmd) => cmd.run().await,
            Command::About(cmd) => cmd.run().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_keys_create() {
        let cli = Cli::try_parse_from(["ajimemo", "keys", "create", "ci-key"]).unwrap();
        assert!(matches!(cli.command, Command::Keys(_)));
    }

    #[test]
    fn test_global_api_url() {
        let cli = Cli::try_parse_from([
            "ajimemo",
            "subscription",
            "--api-url",
            "https://api.ajimemo.com",
        ])
        .unwrap();
        assert_eq!(cli.context().api_url.as_deref(), Some("https://api.ajimemo.com"));
    }

    #[test]
    fn test_upgrade_rejects_free() {
        assert!(Cli::try_parse_from(["ajimemo", "upgrade", "free"]).is_err());
        assert!(Cli::try_parse_from(["ajimemo", "upgrade", "enterprise"]).is_ok());
    }
}
