use async_trait::async_trait;

use crate::domain::{
    Author, Comment, NewAuthor, NewComment, NewPost, Post, PostDetail, PostWithAuthor,
};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `T` is the stored entity, `N` the insert shape without an id.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync {
    /// Load every stored entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity and return it with its store-assigned id.
    async fn insert(&self, entity: N) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Author repository.
pub trait AuthorRepository: BaseRepository<Author, NewAuthor, i64> {}

/// Post repository with the two eager reads.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, i64> {
    /// Every post joined with its author in a single query.
    async fn find_all_with_author(&self) -> Result<Vec<PostWithAuthor>, RepoError>;

    /// One post with its author and all of its comments.
    ///
    /// Comments are fetched in one batch, never one query per comment.
    async fn find_detail_by_id(&self, id: i64) -> Result<Option<PostDetail>, RepoError>;
}

/// Comment repository.
pub trait CommentRepository: BaseRepository<Comment, NewComment, i64> {}
