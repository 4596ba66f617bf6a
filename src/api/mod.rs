//! Client for the AjiMemo REST API.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use crate::api::{ApiClient, ClientOptions, FileTokenStore};
//!
//! let client = ApiClient::new(
//!     ClientOptions::default(),
//!     Arc::new(FileTokenStore::new(token_path)),
//!     observer,
//! )?;
//! let auth = client.login("ada@example.com", "secret").await?;
//! client.set_auth(&auth.data.token)?;
//! let me = client.get_profile().await?;
//! ```

mod client;
mod error;
mod session;
mod store;

pub use client::{ApiClient, ClientOptions, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use session::SessionObserver;
pub use store::{FileTokenStore, TokenStore};
