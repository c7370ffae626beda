//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{AuthorRepository, CommentRepository, PostRepository};
use blog_core::{AuthorService, CommentService, PostService};
use blog_infra::InMemoryStore;
use blog_infra::database::DatabaseConnections;

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use blog_infra::database::{
    PostgresAuthorRepository, PostgresCommentRepository, PostgresPostRepository,
};
#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<AuthorService>,
    pub posts: Arc<PostService>,
    pub comments: Arc<CommentService>,
    pub db: Option<Arc<DatabaseConnections>>,
}

/// The three repositories the services are built on.
struct Repositories {
    authors: Arc<dyn AuthorRepository>,
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl Repositories {
    fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            authors: store.clone(),
            posts: store.clone(),
            comments: store,
        }
    }

    #[cfg(feature = "postgres")]
    fn postgres(db: &DatabaseConnections) -> Self {
        Self {
            authors: Arc::new(PostgresAuthorRepository::new(db.main.clone())),
            posts: Arc::new(PostgresPostRepository::new(db.main.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db.main.clone())),
        }
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let state = match &config.database {
            Some(db_config) => match DatabaseConnections::init(db_config).await {
                Ok(connections) => {
                    if config.auto_migrate {
                        if let Err(e) = Migrator::up(&connections.main, None).await {
                            tracing::error!(
                                "Failed to apply migrations: {}. Using in-memory fallback.",
                                e
                            );
                            return Self::in_memory();
                        }
                        tracing::info!("Database migrations applied");
                    }
                    let repos = Repositories::postgres(&connections);
                    Self::wire(repos, Some(Arc::new(connections)))
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = config;
            tracing::info!("Running without postgres feature - using in-memory store");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::wire(Repositories::in_memory(), None)
    }

    fn wire(repos: Repositories, db: Option<Arc<DatabaseConnections>>) -> Self {
        let authors = Arc::new(AuthorService::new(repos.authors));
        let posts = Arc::new(PostService::new(repos.posts, authors.clone()));
        let comments = Arc::new(CommentService::new(repos.comments, posts.clone()));

        Self {
            authors,
            posts,
            comments,
            db,
        }
    }

    /// Name of the backing store, reported by the health check.
    pub fn storage(&self) -> &'static str {
        if self.db.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }
}
