#[cfg(test)]
mod tests {
    use crate::database::entity::{author, comment, post};
    use crate::database::postgres_repo::{PostgresAuthorRepository, PostgresPostRepository};
    use blog_core::domain::{Author, NewAuthor, NewPost, Post};
    use blog_core::error::RepoError;
    use blog_core::ports::{BaseRepository, PostRepository};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn author_model() -> author::Model {
        author::Model {
            id: 1,
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
        }
    }

    fn post_model(id: i64) -> post::Model {
        post::Model {
            id,
            title: format!("Post {id}"),
            content: "Content".to_owned(),
            excerpt: "Excerpt".to_owned(),
            author_id: 1,
        }
    }

    fn comment_model(id: i64, text: &str) -> comment::Model {
        comment::Model {
            id,
            text: text.to_owned(),
            post_id: 3,
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(3)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = BaseRepository::<Post, NewPost, i64>::find_by_id(&repo, 3)
            .await
            .unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Post 3");
        assert_eq!(post.author_id, 1);
    }

    #[tokio::test]
    async fn test_find_missing_author() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<author::Model>::new()])
            .into_connection();

        let repo = PostgresAuthorRepository::new(db);

        let result = BaseRepository::<Author, NewAuthor, i64>::find_by_id(&repo, 9)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_insert_author_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![author_model()]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresAuthorRepository::new(db);

        let author = BaseRepository::<Author, NewAuthor, i64>::insert(
            &repo,
            NewAuthor {
                first_name: "Ada".to_owned(),
                last_name: "Lovelace".to_owned(),
                email: "ada@example.com".to_owned(),
            },
        )
        .await
        .unwrap();

        assert_eq!(author.id, 1);
        assert_eq!(author.full_name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_insert_failure_surfaces_as_query_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("insert rejected".to_owned())])
            .append_exec_errors(vec![DbErr::Custom("insert rejected".to_owned())])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = BaseRepository::<Post, NewPost, i64>::insert(
            &repo,
            NewPost {
                title: "Title".to_owned(),
                content: "Content".to_owned(),
                excerpt: "Excerpt".to_owned(),
                author_id: 1,
            },
        )
        .await;

        match result {
            Err(RepoError::Query(msg)) => assert!(msg.contains("insert rejected")),
            other => panic!("expected a query error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_find_all_with_author_uses_one_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                (post_model(1), author_model()),
                (post_model(2), author_model()),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.find_all_with_author().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].post.id, 1);
        assert_eq!(posts[1].author.first_name, "Ada");

        let log = repo.db.into_transaction_log();
        assert_eq!(log.len(), 1);
    }

    #[tokio::test]
    async fn test_find_detail_fetches_comments_in_one_batch() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![(post_model(3), author_model())]])
            .append_query_results(vec![vec![
                comment_model(10, "first"),
                comment_model(11, "second"),
                comment_model(12, "third"),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let detail = repo.find_detail_by_id(3).await.unwrap().unwrap();
        assert_eq!(detail.post.id, 3);
        assert_eq!(detail.author.email, "ada@example.com");
        let texts: Vec<_> = detail.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);

        let log = repo.db.into_transaction_log();
        assert_eq!(log.len(), 2);
    }

    #[tokio::test]
    async fn test_find_detail_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<(post::Model, author::Model)>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.find_detail_by_id(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Result<(), RepoError> =
            BaseRepository::<Post, NewPost, i64>::delete(&repo, 8).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }
}
