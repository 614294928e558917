//! Repository for the `events` table.

use sqlx::{PgPool, Postgres, Transaction};

use crate::models::event::{CreateEvent, Event};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, title, description, format, starts_at, location, \
                       price_cents, currency, capacity, attendee_count, image_path, \
                       is_featured, created_at, updated_at";

pub struct EventRepo;

impl EventRepo {
    /// Insert an event unless one with the same title exists.
    ///
    /// Returns `true` if a row was inserted.
    pub async fn insert_if_absent(
        tx: &mut Transaction<'_, Postgres>,
        input: &CreateEvent<'_>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO events
                (category_id, title, description, format, starts_at, location,
                 price_cents, capacity, attendee_count, image_path, is_featured)
             VALUES ($1, $2, $3, $4, $5::timestamptz, $6, $7, $8, $9, $10, $11)
             ON CONFLICT (title) DO NOTHING",
        )
        .bind(input.category_id)
        .bind(input.title)
        .bind(input.description)
        .bind(input.format)
        .bind(input.starts_at)
        .bind(input.location)
        .bind(input.price_cents)
        .bind(input.capacity)
        .bind(input.attendee_count)
        .bind(input.image_path)
        .bind(input.is_featured)
        .execute(&mut **tx)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find an event by exact title.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE title = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List all events, soonest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY starts_at ASC, id ASC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Total number of events.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(pool)
            .await
    }
}
