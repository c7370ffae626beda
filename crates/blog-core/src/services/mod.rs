//! Domain services - orchestrate repositories and mapping.
//!
//! Each service receives its collaborators at construction time.

mod author;
mod comment;
mod post;

pub use author::AuthorService;
pub use comment::CommentService;
pub use post::PostService;
