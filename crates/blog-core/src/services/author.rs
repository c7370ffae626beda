use std::sync::Arc;

use blog_shared::dto::{AuthorResponse, CreateAuthorRequest};

use crate::domain::{Author, NewAuthor};
use crate::error::DomainError;
use crate::ports::AuthorRepository;

/// Author use cases.
pub struct AuthorService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    /// Every author, unpaginated.
    pub async fn list_all(&self) -> Result<Vec<AuthorResponse>, DomainError> {
        let authors = self.repo.find_all().await?;
        Ok(authors.iter().map(AuthorResponse::from).collect())
    }

    /// Resolve an author entity or fail with `NotFound`.
    pub async fn get(&self, id: i64) -> Result<Author, DomainError> {
        tracing::debug!(author_id = id, "Looking up author");
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(author_id = id, "Author not found");
            DomainError::author_not_found(id)
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<AuthorResponse, DomainError> {
        let author = self.get(id).await?;
        Ok((&author).into())
    }

    pub async fn create(
        &self,
        request: CreateAuthorRequest,
    ) -> Result<AuthorResponse, DomainError> {
        let author = self.repo.insert(NewAuthor::from(request)).await?;
        tracing::info!(author_id = author.id, "Author created");
        Ok((&author).into())
    }
}
