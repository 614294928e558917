//! Sample event data for development and demo databases.
//!
//! Seeding is idempotent: categories and events are keyed by their unique
//! name/title, so re-running inserts nothing that already exists.

use suitable_core::setup::SeedReport;

use crate::models::event::{CreateEvent, FORMAT_IN_PERSON, FORMAT_ONLINE};
use crate::repositories::{CategoryRepo, EventRepo};
use crate::DbPool;

/// Category names in display order.
pub const SAMPLE_CATEGORIES: &[&str] = &["Technology", "Music", "Business", "Art", "Sports", "Food"];

/// One sample event, expressed with static data only.
#[derive(Debug, Clone, Copy)]
pub struct SampleEvent {
    pub category: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub format: &'static str,
    /// RFC 3339 start time in South African Standard Time.
    pub starts_at: &'static str,
    pub location: &'static str,
    pub price_cents: i64,
    pub capacity: Option<i32>,
    pub attendee_count: i32,
    pub image_path: Option<&'static str>,
    pub is_featured: bool,
}

const fn lets_elevate(
    title: &'static str,
    starts_at: &'static str,
    location: &'static str,
    image_path: &'static str,
) -> SampleEvent {
    SampleEvent {
        category: "Business",
        title,
        description: Some("A one-day workshop for founders and small business owners"),
        format: FORMAT_IN_PERSON,
        starts_at,
        location,
        price_cents: 9_000,
        capacity: None,
        attendee_count: 0,
        image_path: Some(image_path),
        is_featured: false,
    }
}

pub const SAMPLE_EVENTS: &[SampleEvent] = &[
    SampleEvent {
        category: "Sports",
        title: "Bayhill Premier Cup",
        description: Some("Biggest Youth Soccer Tournament in South Africa Held Annually"),
        format: FORMAT_IN_PERSON,
        starts_at: "2025-12-15T09:00:00+02:00",
        location: "South Africa",
        price_cents: 45_000,
        capacity: Some(1500),
        attendee_count: 1200,
        image_path: Some("/assets/images/BayHillExample.jpeg"),
        is_featured: true,
    },
    SampleEvent {
        category: "Business",
        title: "Customer Relationships, Marketing & Project Workflows",
        description: None,
        format: FORMAT_ONLINE,
        starts_at: "2025-09-17T10:00:00+02:00",
        location: "Virtual Platform",
        price_cents: 30_000,
        capacity: None,
        attendee_count: 0,
        image_path: None,
        is_featured: false,
    },
    lets_elevate(
        "Let's Elevate, Cape Town",
        "2025-11-06T10:00:00+02:00",
        "Workshop 17 Kloof Street",
        "/assets/images/Cape-Town.png",
    ),
    lets_elevate(
        "Let's Elevate, Johannesburg",
        "2025-11-13T10:00:00+02:00",
        "Workshop 17, Hyde Park",
        "/assets/images/Johannesburg.png",
    ),
    lets_elevate(
        "Let's Elevate, Durban",
        "2025-11-19T10:00:00+02:00",
        "Workshop 17, Ballito",
        "/assets/images/Durban.png",
    ),
    lets_elevate(
        "Let's Elevate, Gqeberha",
        "2025-11-26T10:00:00+02:00",
        "TBC",
        "/assets/images/Gqebhera.png",
    ),
];

/// Insert the sample categories and events in a single transaction.
pub async fn populate_sample_data(pool: &DbPool) -> Result<SeedReport, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    for (position, name) in SAMPLE_CATEGORIES.iter().enumerate() {
        if CategoryRepo::insert_if_absent(&mut tx, name, position as i32).await? {
            report.categories_created += 1;
        }
    }

    for sample in SAMPLE_EVENTS {
        let category_id = CategoryRepo::find_by_name(&mut tx, sample.category)
            .await?
            .map(|c| c.id);

        let input = CreateEvent {
            category_id,
            title: sample.title,
            description: sample.description,
            format: sample.format,
            starts_at: sample.starts_at,
            location: sample.location,
            price_cents: sample.price_cents,
            capacity: sample.capacity,
            attendee_count: sample.attendee_count,
            image_path: sample.image_path,
            is_featured: sample.is_featured,
        };

        if EventRepo::insert_if_absent(&mut tx, &input).await? {
            tracing::debug!(title = sample.title, "Inserted sample event");
            report.events_created += 1;
        } else {
            report.events_existing += 1;
        }
    }

    tx.commit().await?;
    Ok(report)
}
