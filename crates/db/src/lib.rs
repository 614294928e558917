//! PostgreSQL access for the Suitable backend: pool setup, embedded schema
//! migrations, repositories, and the sample-data seeder.

use sqlx::postgres::PgPoolOptions;

pub mod migrations;
pub mod models;
pub mod repositories;
pub mod seed;

pub use migrations::{plan_migrations, run_migrations};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
