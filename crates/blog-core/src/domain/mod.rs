//! Domain entities - the core business objects.

mod author;
mod comment;
mod post;

pub use author::{Author, NewAuthor};
pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post, PostDetail, PostWithAuthor};
