use std::marker::PhantomData;

use sqlx::AnyPool;
use tracing::debug;

use crate::model::Entity;
use crate::utils::db_utils::{
    build_delete_sql, build_select_all_sql, build_select_by_key_sql, build_upsert_sql,
};

/// Storage gateway for one entity type.
///
/// Holds a handle to the shared pool; each call checks a connection out for
/// the duration of that call only.
pub struct Repository<E> {
    pool: AnyPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(pool: AnyPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<E>, sqlx::Error> {
        let sql = build_select_all_sql(E::TABLE, E::COLUMNS);
        debug!(sql = %sql, "Fetching all rows");

        sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await
    }

    /// Absence is `Ok(None)`, not an error.
    pub async fn find_by_id(&self, key: i32) -> Result<Option<E>, sqlx::Error> {
        let sql = build_select_by_key_sql(E::TABLE, E::COLUMNS);
        debug!(sql = %sql, key, "Fetching row by key");

        sqlx::query_as::<_, E>(&sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
    }

    /// Stores `entity` under its own key, overwriting any existing row.
    pub async fn save(&self, entity: E) -> Result<E, sqlx::Error> {
        let sql = build_upsert_sql(E::TABLE, E::COLUMNS);
        debug!(sql = %sql, key = entity.key(), "Saving row");

        entity
            .bind_columns(sqlx::query::<sqlx::Any>(&sql))
            .execute(&self.pool)
            .await?;

        Ok(entity)
    }

    /// Deleting a missing key is a no-op. Returns the number of rows removed.
    pub async fn delete_by_id(&self, key: i32) -> Result<u64, sqlx::Error> {
        let sql = build_delete_sql(E::TABLE, E::key_column());

        let result = sqlx::query::<sqlx::Any>(&sql)
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!(sql = %sql, key, rows = result.rows_affected(), "Deleted row");
        Ok(result.rows_affected())
    }
}
