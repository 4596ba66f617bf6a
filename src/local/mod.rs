//! Local state kept between invocations: config file and auth token.

mod config;

pub use config::LocalConfig;
