use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, SqlErr,
};

use blog_core::error::RepoError;
use blog_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Classify a SeaORM error into the repository taxonomy.
pub(crate) fn repo_error(err: DbErr) -> RepoError {
    let sql_err = err.sql_err();
    classify(sql_err, err)
}

/// `sql_err` is the driver-level violation, if any, extracted from `err`.
fn classify(sql_err: Option<SqlErr>, err: DbErr) -> RepoError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(msg))
        | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => RepoError::Constraint(msg),
        _ => match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                RepoError::Connection(err.to_string())
            }
            _ => RepoError::Query(err.to_string()),
        },
    }
}

#[async_trait]
impl<E, T, N, ID> BaseRepository<T, N, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Send + Sync + 'static,
    N: Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let rows = E::find().all(&self.db).await.map_err(repo_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, entity: N) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.insert(&self.db).await.map_err(repo_error)?;

        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnAcquireErr, RuntimeErr};

    #[test]
    fn test_connection_failures() {
        let err = repo_error(DbErr::Conn(RuntimeErr::Internal("refused".into())));
        assert!(matches!(err, RepoError::Connection(msg) if msg.contains("refused")));

        let err = repo_error(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout));
        assert!(matches!(err, RepoError::Connection(_)));
    }

    #[test]
    fn test_other_failures_are_query_errors() {
        let err = repo_error(DbErr::Custom("bad column".into()));
        assert!(matches!(err, RepoError::Query(msg) if msg.contains("bad column")));

        let err = repo_error(DbErr::Exec(RuntimeErr::Internal("syntax".into())));
        assert!(matches!(err, RepoError::Query(_)));

        let err = repo_error(DbErr::RecordNotInserted);
        assert!(matches!(err, RepoError::Query(_)));
    }

    #[test]
    fn test_constraint_violations() {
        let err = classify(
            Some(SqlErr::UniqueConstraintViolation("author_email_key".into())),
            DbErr::Custom("duplicate".into()),
        );
        assert!(matches!(err, RepoError::Constraint(msg) if msg == "author_email_key"));

        let err = classify(
            Some(SqlErr::ForeignKeyConstraintViolation("fk_post_author".into())),
            DbErr::Custom("missing author".into()),
        );
        assert!(matches!(err, RepoError::Constraint(msg) if msg == "fk_post_author"));
    }
}
