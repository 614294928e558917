//! Repository for the `event_categories` table.

use sqlx::{PgPool, Postgres, Transaction};

use crate::models::event::EventCategory;

const COLUMNS: &str = "id, name, sort_order, created_at, updated_at";

pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a category unless one with the same name exists.
    ///
    /// Returns `true` if a row was inserted.
    pub async fn insert_if_absent(
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        sort_order: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO event_categories (name, sort_order) VALUES ($1, $2)
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .bind(sort_order)
        .execute(&mut **tx)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a category by exact name inside an open transaction.
    pub async fn find_by_name(
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Option<EventCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_categories WHERE name = $1");
        sqlx::query_as::<_, EventCategory>(&query)
            .bind(name)
            .fetch_optional(&mut **tx)
            .await
    }

    /// List all categories in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<EventCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_categories ORDER BY sort_order, id");
        sqlx::query_as::<_, EventCategory>(&query).fetch_all(pool).await
    }
}
