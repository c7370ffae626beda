use std::sync::Arc;

use blog_shared::dto::{CreatePostRequest, PostDetailResponse, PostResponse};

use crate::domain::{Post, PostDetail, PostWithAuthor};
use crate::error::DomainError;
use crate::mapping;
use crate::ports::PostRepository;

use super::AuthorService;

/// Post use cases. Depends on [`AuthorService`] to resolve a post's author.
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    authors: Arc<AuthorService>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, authors: Arc<AuthorService>) -> Self {
        Self { repo, authors }
    }

    /// Every post with its author. Comments are not part of this view.
    pub async fn list_all(&self) -> Result<Vec<PostResponse>, DomainError> {
        let posts = self.repo.find_all_with_author().await?;
        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// Resolve a post with its author and comments, or fail with `NotFound`.
    pub async fn get(&self, id: i64) -> Result<PostDetail, DomainError> {
        tracing::debug!(post_id = id, "Looking up post with comments");
        self.repo.find_detail_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(post_id = id, "Post not found");
            DomainError::post_not_found(id)
        })
    }

    /// Resolve just the post row. Same failure as [`PostService::get`].
    pub async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<PostDetailResponse, DomainError> {
        let detail = self.get(id).await?;
        Ok((&detail).into())
    }

    /// Create a post. Nothing is written when the author does not exist.
    pub async fn create(&self, request: CreatePostRequest) -> Result<PostResponse, DomainError> {
        let author = self.authors.get(request.author_id).await?;
        let post = self.repo.insert(mapping::new_post(request, &author)).await?;
        tracing::info!(post_id = post.id, author_id = author.id, "Post created");

        Ok(PostResponse::from(&PostWithAuthor { post, author }))
    }
}
