//! Domain entities - the core business objects.

mod audit;
mod comment;
mod post;
mod validation;

pub use audit::Audit;
pub use comment::{Comment, CommentInput, CommentSortField, NewComment};
pub use post::{Post, PostData, PostInput, PostSortField};
