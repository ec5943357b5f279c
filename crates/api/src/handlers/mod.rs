pub mod users;
pub mod wiki;
