//! Shared setup for commands that talk to the API.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::api::{ApiClient, FileTokenStore, SessionObserver};
use crate::local::LocalConfig;

/// Per-invocation settings taken from global flags.
pub struct Context {
    /// Base URL from `--api-url` / `AJIMEMO_API_URL`.
    pub api_url: Option<String>,
}

impl Context {
    pub fn config(&self) -> Result<LocalConfig> {
        LocalConfig::load()
    }

    /// Client backed by the on-disk token and reporting expired sessions on
    /// the terminal.
    pub fn client(&self) -> Result<ApiClient> {
        let config = self.config()?;
        let options = config.client_options(self.api_url.as_deref());
        let token_path = LocalConfig::token_path()?;

        debug!(base_url = %options.base_url, token = %token_path.display(), "building client");

        ApiClient::new(
            options,
            Arc::new(FileTokenStore::new(token_path)),
            Arc::new(TerminalObserver),
        )
        .context("Failed to create API client")
    }

    /// Like [`client`](Self::client), but fails early when no token is
    /// stored.
    pub fn authenticated_client(&self) -> Result<ApiClient> {
        let client = self.client()?;
        if !client.session().is_authenticated()? {
            anyhow::bail!("Not logged in. Run `ajimemo login` first.");
        }
        Ok(client)
    }
}

/// Tells the user to sign in again after the server rejected the token.
pub struct TerminalObserver;

impl SessionObserver for TerminalObserver {
    fn session_invalidated(&self, login_route: &str) {
        eprintln!(
            "Your session has expired. Run `{}` to sign in again.",
            command_for_route(login_route)
        );
    }
}

/// CLI command that corresponds to a web route.
fn command_for_route(route: &str) -> String {
    let name = route.trim_matches('/');
    if name.is_empty() {
        return "ajimemo".to_string();
    }
    format!("ajimemo {}", name.replace('/', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_for_route() {
        assert_eq!(command_for_route("/login"), "ajimemo login");
        assert_eq!(
            command_for_route("/dashboard/subscription"),
            "ajimemo dashboard subscription"
        );
        assert_eq!(command_for_route("/"), "ajimemo");
    }
}
