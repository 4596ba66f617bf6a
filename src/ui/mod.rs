//! Plain-text building blocks for terminal pages.
//!
//! Everything here is a pure function of its fields, rendered through
//! `Display`.

mod card;
mod footer;
mod link;
mod logo;

pub use card::{ChangeKind, StatCard};
pub use footer::AddressFooter;
pub use link::Link;
pub use logo::{LogoSize, LogoText};
