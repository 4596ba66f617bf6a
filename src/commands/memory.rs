//! Memory command - save and search memories as the logged-in user.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::Context;
use crate::local::LocalConfig;
use crate::types::{DEFAULT_QUERY_LIMIT, Memory, MemoryQuery, SaveMemoryRequest, parse_tags};

#[derive(Args)]
pub struct MemoryCmd {
    #[command(subcommand)]
    pub command: MemorySubCmd,
}

#[derive(Subcommand)]
pub enum MemorySubCmd {
    /// Save a memory
    Save(SaveCmd),

    /// Search memories
    Query(QueryCmd),
}

#[derive(Args)]
pub struct SaveCmd {
    /// Memory text
    pub text: String,

    /// User or session identifier (default: `default_uid` from config)
    #[arg(long)]
    pub uid: Option<String>,

    /// Namespace (default: config, then the uid)
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Comma-separated tags
    #[arg(long, short = 't')]
    pub tags: Option<String>,
}

#[derive(Args)]
pub struct QueryCmd {
    /// Full-text search query
    pub query: Option<String>,

    /// User or session identifier (default: `default_uid` from config)
    #[arg(long)]
    pub uid: Option<String>,

    /// Namespace filter
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Comma-separated tags to filter by
    #[arg(long, short = 't')]
    pub tags: Option<String>,

    /// Maximum number of results (1-100)
    #[arg(long, short = 'l', default_value_t = DEFAULT_QUERY_LIMIT)]
    pub limit: u32,

    /// Results to skip
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

impl MemoryCmd {
    pub async fn run(&self, ctx: &Context) -> Result<()> {
        let config = ctx.config()?;
        let client = ctx.authenticated_client()?;

        match &self.command {
            MemorySubCmd::Save(cmd) => {
                let uid = resolve_uid(cmd.uid.as_deref(), &config)?;
                let mut request = SaveMemoryRequest::new(uid, cmd.text.clone());
                if let Some(ns) = cmd.namespace.as_ref().or(config.default_namespace.as_ref()) {
                    request = request.with_namespace(ns.clone());
                }
                if let Some(tags) = &cmd.tags {
                    request = request.with_tags(parse_tags(tags));
                }

                let resp = client
                    .save_memory(&request)
                    .await
                    .context("Failed to save memory")?;
                println!("Saved memory #{} in {}.", resp.data.id, resp.data.namespace);
            }
            MemorySubCmd::Query(cmd) => {
                let mut query = MemoryQuery::new(resolve_uid(cmd.uid.as_deref(), &config)?);
                query.namespace = cmd
                    .namespace
                    .clone()
                    .or_else(|| config.default_namespace.clone());
                query.tags = cmd.tags.as_deref().map(parse_tags).unwrap_or_default();
                query.query = cmd.query.clone();
                query.limit = cmd.limit;
                query.offset = cmd.offset;

                let resp = client
                    .query_memories(&query)
                    .await
                    .context("Failed to query memories")?;

                if resp.data.is_empty() {
                    println!("No memories found.");
                    return Ok(());
                }

                for memory in &resp.data {
                    print_memory(memory);
                }
                println!("\n{} memories", resp.data.len());
            }
        }
        Ok(())
    }
}

fn resolve_uid(flag: Option<&str>, config: &LocalConfig) -> Result<String> {
    flag.map(String::from)
        .or_else(|| config.default_uid.clone())
        .context("No uid given. Pass --uid or run `ajimemo config set-uid <uid>`.")
}

fn print_memory(memory: &Memory) {
    println!(
        "#{} [{}] {}",
        memory.id,
        memory.namespace,
        memory.created_at.format("%Y-%m-%d %H:%M")
    );
    println!("  {}", memory.text);
    if !memory.tags.is_empty() {
        println!("  tags: {}", memory.tags.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uid_prefers_flag() {
        let mut config = LocalConfig::default();
        config.default_uid = Some("from-config".to_string());

        assert_eq!(resolve_uid(Some("flag"), &config).unwrap(), "flag");
        assert_eq!(resolve_uid(None, &config).unwrap(), "from-config");
    }

    #[test]
    fn test_resolve_uid_missing() {
        let err = resolve_uid(None, &LocalConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--uid"));
    }
}
