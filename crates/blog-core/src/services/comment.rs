use std::sync::Arc;

use blog_shared::dto::{CommentResponse, CreateCommentRequest};

use crate::error::DomainError;
use crate::mapping;
use crate::ports::CommentRepository;

use super::PostService;

/// Comment use cases. Depends on [`PostService`] to resolve the parent post.
pub struct CommentService {
    repo: Arc<dyn CommentRepository>,
    posts: Arc<PostService>,
}

impl CommentService {
    pub fn new(repo: Arc<dyn CommentRepository>, posts: Arc<PostService>) -> Self {
        Self { repo, posts }
    }

    /// Add a comment under `post_id`. Nothing is written when the post does not exist.
    pub async fn create(
        &self,
        request: CreateCommentRequest,
        post_id: i64,
    ) -> Result<CommentResponse, DomainError> {
        let post = self.posts.get_post(post_id).await?;
        let comment = self
            .repo
            .insert(mapping::new_comment(request, &post))
            .await?;
        tracing::info!(comment_id = comment.id, post_id, "Comment created");

        Ok((&comment).into())
    }
}
