use serde::{Deserialize, Serialize};

use super::{Author, Comment};

/// Post entity - a blog article written by one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author_id: i64,
}

/// A post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author_id: i64,
}

/// A post loaded together with its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Author,
}

/// A post loaded together with its author and every comment, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub post: Post,
    pub author: Author,
    pub comments: Vec<Comment>,
}
