//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Writes that must commit
//! together also come in `*_in` form, taking an open transaction.

pub mod page_repo;
pub mod stats_repo;
pub mod user_repo;

pub use page_repo::PageRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
