//! # Blog Shared
//!
//! Wire types for the blog API. Field names follow the public JSON contract
//! (`titulo`, `dataCriacao`, ...), which is why they differ from the domain.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, PageResponse};
