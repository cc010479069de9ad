//! # Blog Infrastructure
//!
//! Concrete implementations of the repository ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//!
//! The in-memory store is always available and backs the API when no
//! database is configured.

pub mod database;

pub use database::{InMemoryCommentRepository, InMemoryPostRepository, InMemoryStore};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, DbConn, PostgresCommentRepository, PostgresPostRepository};
