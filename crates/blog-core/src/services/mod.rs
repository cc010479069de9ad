//! Application services - the operations exposed over HTTP.

mod comments;
mod posts;

pub use comments::CommentService;
pub use posts::PostService;

#[cfg(test)]
mod tests;
