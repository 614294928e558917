//! Integration tests for sample-data seeding.

use sqlx::PgPool;
use suitable_db::repositories::{CategoryRepo, EventRepo};
use suitable_db::seed::{populate_sample_data, SAMPLE_CATEGORIES, SAMPLE_EVENTS};

#[sqlx::test(migrator = "suitable_db::migrations::MIGRATOR")]
async fn first_run_inserts_everything(pool: PgPool) {
    let report = populate_sample_data(&pool).await.unwrap();

    assert_eq!(report.categories_created, SAMPLE_CATEGORIES.len());
    assert_eq!(report.events_created, SAMPLE_EVENTS.len());
    assert_eq!(report.events_existing, 0);
    assert_eq!(EventRepo::count(&pool).await.unwrap(), SAMPLE_EVENTS.len() as i64);
}

#[sqlx::test(migrator = "suitable_db::migrations::MIGRATOR")]
async fn second_run_inserts_nothing(pool: PgPool) {
    populate_sample_data(&pool).await.unwrap();
    let report = populate_sample_data(&pool).await.unwrap();

    assert_eq!(report.categories_created, 0);
    assert_eq!(report.events_created, 0);
    assert_eq!(report.events_existing, SAMPLE_EVENTS.len());
    assert_eq!(EventRepo::count(&pool).await.unwrap(), SAMPLE_EVENTS.len() as i64);
    assert_eq!(CategoryRepo::list(&pool).await.unwrap().len(), SAMPLE_CATEGORIES.len());
}

#[sqlx::test(migrator = "suitable_db::migrations::MIGRATOR")]
async fn featured_event_is_linked_to_its_category(pool: PgPool) {
    populate_sample_data(&pool).await.unwrap();

    let event = EventRepo::find_by_title(&pool, "Bayhill Premier Cup")
        .await
        .unwrap()
        .expect("featured sample event");
    let sports = CategoryRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.name == "Sports")
        .unwrap();

    assert!(event.is_featured);
    assert_eq!(event.category_id, Some(sports.id));
    assert_eq!(event.price_cents, 45_000);
    assert_eq!(event.currency, "ZAR");
    assert_eq!(event.format, "in_person");
}

#[sqlx::test(migrator = "suitable_db::migrations::MIGRATOR")]
async fn existing_event_is_left_untouched(pool: PgPool) {
    populate_sample_data(&pool).await.unwrap();
    sqlx::query("UPDATE events SET attendee_count = 1499 WHERE title = 'Bayhill Premier Cup'")
        .execute(&pool)
        .await
        .unwrap();

    populate_sample_data(&pool).await.unwrap();

    let event = EventRepo::find_by_title(&pool, "Bayhill Premier Cup")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(event.attendee_count, 1499);
}

#[sqlx::test(migrator = "suitable_db::migrations::MIGRATOR")]
async fn events_list_is_chronological(pool: PgPool) {
    populate_sample_data(&pool).await.unwrap();

    let events = EventRepo::list(&pool).await.unwrap();
    assert_eq!(events.first().unwrap().title, "Customer Relationships, Marketing & Project Workflows");
    assert_eq!(events.last().unwrap().title, "Bayhill Premier Cup");
}
