//! In-memory store - used when no database is configured, and in tests.
//!
//! One table set backs all three repositories so that foreign keys and the
//! post-to-comment cascade behave like the relational schema.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{
    Author, Comment, NewAuthor, NewComment, NewPost, Post, PostDetail, PostWithAuthor,
};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, BaseRepository, CommentRepository, PostRepository};

/// Rows are kept in insertion order, which is also ascending id order.
#[derive(Default)]
struct Tables {
    authors: Vec<Author>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    last_author_id: i64,
    last_post_id: i64,
    last_comment_id: i64,
}

impl Tables {
    fn author(&self, id: i64) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    fn post(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn author_of(&self, post: &Post) -> Result<Author, RepoError> {
        self.author(post.author_id).cloned().ok_or_else(|| {
            RepoError::Query(format!(
                "post {} references missing author {}",
                post.id, post.author_id
            ))
        })
    }

    fn comments_of(&self, post_id: i64) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect()
    }
}

/// In-memory implementation of every blog repository.
///
/// Note: Data is lost on process restart.
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Author, NewAuthor, i64> for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        Ok(self.tables.read().await.authors.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, RepoError> {
        Ok(self.tables.read().await.author(id).cloned())
    }

    async fn insert(&self, new: NewAuthor) -> Result<Author, RepoError> {
        let mut tables = self.tables.write().await;
        tables.last_author_id += 1;

        let author = Author {
            id: tables.last_author_id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
        };
        tables.authors.push(author.clone());
        Ok(author)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        if tables.posts.iter().any(|p| p.author_id == id) {
            return Err(RepoError::Constraint(format!(
                "author {id} is still referenced by posts"
            )));
        }

        let before = tables.authors.len();
        tables.authors.retain(|a| a.id != id);
        if tables.authors.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

impl AuthorRepository for InMemoryStore {}

#[async_trait]
impl BaseRepository<Post, NewPost, i64> for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.tables.read().await.posts.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.tables.read().await.post(id).cloned())
    }

    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let mut tables = self.tables.write().await;
        if tables.author(new.author_id).is_none() {
            return Err(RepoError::Constraint(format!(
                "author {} does not exist",
                new.author_id
            )));
        }
        tables.last_post_id += 1;

        let post = Post {
            id: tables.last_post_id,
            title: new.title,
            content: new.content,
            excerpt: new.excerpt,
            author_id: new.author_id,
        };
        tables.posts.push(post.clone());
        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        if tables.posts.len() == before {
            return Err(RepoError::NotFound);
        }

        tables.comments.retain(|c| c.post_id != id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_all_with_author(&self) -> Result<Vec<PostWithAuthor>, RepoError> {
        let tables = self.tables.read().await;
        tables
            .posts
            .iter()
            .map(|post| {
                Ok(PostWithAuthor {
                    post: post.clone(),
                    author: tables.author_of(post)?,
                })
            })
            .collect()
    }

    async fn find_detail_by_id(&self, id: i64) -> Result<Option<PostDetail>, RepoError> {
        let tables = self.tables.read().await;
        let Some(post) = tables.post(id) else {
            return Ok(None);
        };

        Ok(Some(PostDetail {
            post: post.clone(),
            author: tables.author_of(post)?,
            comments: tables.comments_of(id),
        }))
    }
}

#[async_trait]
impl BaseRepository<Comment, NewComment, i64> for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Comment>, RepoError> {
        Ok(self.tables.read().await.comments.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, new: NewComment) -> Result<Comment, RepoError> {
        let mut tables = self.tables.write().await;
        if tables.post(new.post_id).is_none() {
            return Err(RepoError::Constraint(format!(
                "post {} does not exist",
                new.post_id
            )));
        }
        tables.last_comment_id += 1;

        let comment = Comment {
            id: tables.last_comment_id,
            text: new.text,
            post_id: new.post_id,
        };
        tables.comments.push(comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        let before = tables.comments.len();
        tables.comments.retain(|c| c.id != id);
        if tables.comments.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

impl CommentRepository for InMemoryStore {}

#[cfg(test)]
mod tests {
    use super::*;

    type Authors = dyn BaseRepository<Author, NewAuthor, i64>;
    type Posts = dyn BaseRepository<Post, NewPost, i64>;
    type Comments = dyn BaseRepository<Comment, NewComment, i64>;

    async fn seeded() -> InMemoryStore {
        let store = InMemoryStore::new();
        let authors: &Authors = &store;
        authors
            .insert(NewAuthor {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            })
            .await
            .unwrap();
        store
    }

    fn new_post(author_id: i64) -> NewPost {
        NewPost {
            title: "Title".to_string(),
            content: "Content".to_string(),
            excerpt: "Excerpt".to_string(),
            author_id,
        }
    }

    fn new_comment(post_id: i64, text: &str) -> NewComment {
        NewComment {
            text: text.to_string(),
            post_id,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = seeded().await;
        let posts: &Posts = &store;
        let first = posts.insert(new_post(1)).await.unwrap();
        let second = posts.insert(new_post(1)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_post_requires_existing_author() {
        let store = seeded().await;
        let posts: &Posts = &store;
        let err = posts.insert(new_post(9)).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert!(posts.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_detail_lists_comments_in_insertion_order() {
        let store = seeded().await;
        let posts: &Posts = &store;
        let comments: &Comments = &store;
        let post = posts.insert(new_post(1)).await.unwrap();
        let other = posts.insert(new_post(1)).await.unwrap();

        comments.insert(new_comment(post.id, "a")).await.unwrap();
        comments.insert(new_comment(other.id, "x")).await.unwrap();
        comments.insert(new_comment(post.id, "b")).await.unwrap();

        let detail = store.find_detail_by_id(post.id).await.unwrap().unwrap();
        let texts: Vec<_> = detail.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["a", "b"]);
        assert_eq!(detail.author.full_name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_deleting_post_cascades_to_comments() {
        let store = seeded().await;
        let posts: &Posts = &store;
        let comments: &Comments = &store;
        let post = posts.insert(new_post(1)).await.unwrap();
        comments.insert(new_comment(post.id, "gone")).await.unwrap();

        posts.delete(post.id).await.unwrap();

        assert!(comments.find_all().await.unwrap().is_empty());
        assert!(matches!(
            posts.delete(post.id).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_author_with_posts_cannot_be_deleted() {
        let store = seeded().await;
        let posts: &Posts = &store;
        let authors: &Authors = &store;
        posts.insert(new_post(1)).await.unwrap();

        assert!(matches!(
            authors.delete(1).await,
            Err(RepoError::Constraint(_))
        ));
    }

    #[tokio::test]
    async fn test_list_joins_authors() {
        let store = seeded().await;
        let posts: &Posts = &store;
        posts.insert(new_post(1)).await.unwrap();

        let listed = store.find_all_with_author().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].author.email, "ada@example.com");
    }
}
