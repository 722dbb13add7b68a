//! `SQLite` storage layer for `userbook`.
//!
//! All engine access goes through [`Database`], which owns one connection
//! and releases it exactly once. Operations are grouped by concern:
//!
//! - [`connection`] - open/close lifecycle
//! - [`statement`] - prepare, bind, step, finalize
//! - [`schema`] - idempotent `Users` table creation
//! - [`users`] - validated inserts and updates
//! - [`reader`] - row traversal and typed listing

pub mod connection;
pub mod reader;
pub mod schema;
pub mod statement;
pub mod users;

pub use connection::Database;
pub use reader::READ_ALL_SQL;
pub use schema::{USERS_TABLE, USERS_TABLE_SCHEMA};
pub use users::{INSERT_USER_SQL, UPDATE_USER_SQL};
