//! Password command - reset or change the account password.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::Context;

#[derive(Args)]
pub struct PasswordCmd {
    #[command(subcommand)]
    pub command: PasswordSubCmd,
}

#[derive(Subcommand)]
pub enum PasswordSubCmd {
    /// Email a password reset link
    Forgot(ForgotCmd),

    /// Set a new password using a reset token
    Reset(ResetCmd),

    /// Change the password of the logged-in account
    Change(ChangeCmd),
}

#[derive(Args)]
pub struct ForgotCmd {
    /// Account email
    pub email: String,
}

#[derive(Args)]
pub struct ResetCmd {
    /// Token from the reset email
    pub token: String,

    /// New password
    #[arg(long, env = "AJIMEMO_NEW_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args)]
pub struct ChangeCmd {
    /// Current password
    #[arg(long, env = "AJIMEMO_PASSWORD", hide_env_values = true)]
    pub current: String,

    /// New password
    #[arg(long = "new", env = "AJIMEMO_NEW_PASSWORD", hide_env_values = true)]
    pub new_password: String,
}

impl PasswordCmd {
    pub async fn run(&self, ctx: &Context) -> Result<()> {
        let ack = match &self.command {
            PasswordSubCmd::Forgot(cmd) => ctx
                .client()?
                .forgot_password(&cmd.email)
                .await
                .context("Failed to request password reset")?,
            PasswordSubCmd::Reset(cmd) => ctx
                .client()?
                .reset_password(&cmd.token, &cmd.password)
                .await
                .context("Failed to reset password")?,
            PasswordSubCmd::Change(cmd) => {
                if cmd.current == cmd.new_password {
                    anyhow::bail!("New password must differ from the current one.");
                }
                ctx.authenticated_client()?
                    .change_password(&cmd.current, &cmd.new_password)
                    .await
                    .context("Failed to change password")?
            }
        };

        let fallback = match &self.command {
            PasswordSubCmd::Forgot(_) => "If the account exists, a reset email is on its way.",
            PasswordSubCmd::Reset(_) => "Password reset. You can now log in.",
            PasswordSubCmd::Change(_) => "Password changed.",
        };
        println!("{}", ack.message_or(fallback));
        Ok(())
    }
}
