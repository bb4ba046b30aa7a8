//! Storage layer
//!
//! Uses SQLite (embedded) through sqlx.

pub mod db;
pub mod seed;

pub use db::Database;
pub use seed::seed_if_empty;
