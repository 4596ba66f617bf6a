//! CLI command implementations.

mod about;
mod auth;
mod billing;
mod config;
mod context;
mod dashboard;
mod keys;
mod memory;
mod password;
mod profile;

pub use about::AboutCmd;
pub use auth::{LoginCmd, LogoutCmd, RegisterCmd};
pub use billing::{SubscriptionCmd, UpgradeCmd};
pub use config::ConfigCmd;
pub use context::Context;
pub use dashboard::DashboardCmd;
pub use keys::KeysCmd;
pub use memory::MemoryCmd;
pub use password::PasswordCmd;
pub use profile::ProfileCmd;
