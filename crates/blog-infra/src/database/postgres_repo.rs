//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, ModelTrait, QueryOrder};

use blog_core::domain::{Author, Comment, Post, PostDetail, PostWithAuthor};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, CommentRepository, PostRepository};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

impl AuthorRepository for PostgresAuthorRepository {}

impl CommentRepository for PostgresCommentRepository {}

/// Pair a post row with the author row the join produced.
fn with_author(
    post: post::Model,
    author: Option<author::Model>,
) -> Result<(Post, Author), RepoError> {
    // author_id is NOT NULL with a foreign key, so a missing row means the join is broken.
    let author = author.ok_or_else(|| {
        RepoError::Query(format!(
            "post {} references missing author {}",
            post.id, post.author_id
        ))
    })?;

    Ok((post.into(), author.into()))
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all_with_author(&self) -> Result<Vec<PostWithAuthor>, RepoError> {
        tracing::debug!("Loading all posts joined with authors");

        let rows = PostEntity::find()
            .find_also_related(AuthorEntity)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        rows.into_iter()
            .map(|(post, author)| {
                let (post, author) = with_author(post, author)?;
                Ok(PostWithAuthor { post, author })
            })
            .collect()
    }

    async fn find_detail_by_id(&self, id: i64) -> Result<Option<PostDetail>, RepoError> {
        tracing::debug!(post_id = id, "Loading post with author and comments");

        let Some((post, author)) = PostEntity::find_by_id(id)
            .find_also_related(AuthorEntity)
            .one(&self.db)
            .await
            .map_err(repo_error)?
        else {
            return Ok(None);
        };

        // One query for the whole collection.
        let comments = post
            .find_related(CommentEntity)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        let (post, author) = with_author(post, author)?;
        Ok(Some(PostDetail {
            post,
            author,
            comments: comments.into_iter().map(Comment::from).collect(),
        }))
    }
}

