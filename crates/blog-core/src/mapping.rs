//! Conversions between domain entities and the wire types in `blog-shared`.
//!
//! All of these are pure field copies, with two exceptions: `fullName` is
//! computed from the author's names, and the post id is rendered as text.

use blog_shared::dto::{
    AuthorResponse, CommentResponse, CreateAuthorRequest, CreateCommentRequest,
    CreatePostRequest, PostDetailResponse, PostResponse,
};

use crate::domain::{
    Author, Comment, NewAuthor, NewComment, NewPost, Post, PostDetail, PostWithAuthor,
};

impl From<&Author> for AuthorResponse {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            full_name: author.full_name(),
            email: author.email.clone(),
        }
    }
}

impl From<CreateAuthorRequest> for NewAuthor {
    fn from(request: CreateAuthorRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
        }
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text.clone(),
        }
    }
}

/// Build the basic post view from a post and its resolved author.
pub fn post_response(post: &Post, author: &Author) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        excerpt: post.excerpt.clone(),
        author: author.into(),
    }
}

impl From<&PostWithAuthor> for PostResponse {
    fn from(loaded: &PostWithAuthor) -> Self {
        post_response(&loaded.post, &loaded.author)
    }
}

impl From<&PostDetail> for PostDetailResponse {
    fn from(detail: &PostDetail) -> Self {
        Self {
            post: post_response(&detail.post, &detail.author),
            comments: detail.comments.iter().map(CommentResponse::from).collect(),
        }
    }
}

/// Build an unsaved post; the author comes from a separate lookup, not the request.
pub fn new_post(request: CreatePostRequest, author: &Author) -> NewPost {
    NewPost {
        title: request.title,
        content: request.content,
        excerpt: request.excerpt,
        author_id: author.id,
    }
}

/// Build an unsaved comment attached to an already resolved post.
pub fn new_comment(request: CreateCommentRequest, post: &Post) -> NewComment {
    NewComment {
        text: request.text,
        post_id: post.id,
    }
}
