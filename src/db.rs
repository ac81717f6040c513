use anyhow::{Context, Result};
use sqlx::AnyPool;
use sqlx::any::{AnyPoolOptions, install_default_drivers};

use crate::model::{
    Entity, city::City, division::Division, employee::Employee, payroll::Payroll, state::State,
};

pub async fn init_db(database_url: &str, max_connections: u32) -> Result<AnyPool> {
    install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// One table per entity, keyed by its identifier. Existing tables are left alone.
pub async fn ensure_schema(pool: &AnyPool) -> Result<()> {
    create_table::<City>(pool).await?;
    create_table::<Division>(pool).await?;
    create_table::<Employee>(pool).await?;
    create_table::<Payroll>(pool).await?;
    create_table::<State>(pool).await?;

    log::info!("Schema ready: 5 tables");
    Ok(())
}

async fn create_table<E: Entity>(pool: &AnyPool) -> Result<()> {
    sqlx::query::<sqlx::Any>(E::CREATE_TABLE)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to create table {}", E::TABLE))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_pool;

    #[actix_web::test]
    async fn ensure_schema_is_repeatable() {
        let pool = test_pool().await;

        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();
    }
}
