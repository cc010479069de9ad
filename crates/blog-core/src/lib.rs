//! # Blog Core
//!
//! The domain layer of the blog API: posts, comments, and the rules that
//! tie them together. This crate has no infrastructure dependencies; storage
//! is reached through the repository ports in [`ports`].

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use pagination::{Direction, Page, PageLimits, PageRequest, Sort, SortField};
pub use services::{CommentService, PostService};
