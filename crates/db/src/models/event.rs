//! Event and event category models.

use serde::Serialize;
use sqlx::FromRow;
use suitable_core::types::{DbId, Timestamp};

/// Stored values of `events.format`.
pub const FORMAT_IN_PERSON: &str = "in_person";
pub const FORMAT_ONLINE: &str = "online";

/// A row from the `event_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventCategory {
    pub id: DbId,
    pub name: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub category_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub format: String,
    pub starts_at: Timestamp,
    pub location: String,
    /// Ticket price in the minor unit of `currency`.
    pub price_cents: i64,
    pub currency: String,
    pub capacity: Option<i32>,
    pub attendee_count: i32,
    pub image_path: Option<String>,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an event.
///
/// `starts_at` is an RFC 3339 string cast by PostgreSQL, so static seed
/// rows need no fallible parsing on the Rust side.
#[derive(Debug, Clone)]
pub struct CreateEvent<'a> {
    pub category_id: Option<DbId>,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub format: &'a str,
    pub starts_at: &'a str,
    pub location: &'a str,
    pub price_cents: i64,
    pub capacity: Option<i32>,
    pub attendee_count: i32,
    pub image_path: Option<&'a str>,
    pub is_featured: bool,
}
