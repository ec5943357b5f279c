//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Serializable response shapes built from the entity

pub mod page;
pub mod stats;
pub mod user;
