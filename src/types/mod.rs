//! Payload types mirroring the AjiMemo backend's JSON contracts.

#![allow(dead_code)]

mod account;
mod api_key;
mod billing;
mod envelope;
mod memory;

pub use account::*;
pub use api_key::*;
pub use billing::*;
pub use envelope::*;
pub use memory::*;
