//! Domain types and pure page logic shared by the database and API crates.
//!
//! Nothing in here touches the database or the network.

pub mod error;
pub mod markdown;
pub mod page;
pub mod types;
pub mod user;
