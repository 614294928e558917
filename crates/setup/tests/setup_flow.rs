//! End-to-end tests of the setup sequence against a real database.
//!
//! Every test starts from an empty database (`migrations = false`) so the
//! migration stage has real work to do.

use argon2::password_hash::{PasswordHash, PasswordVerifier};
use argon2::Argon2;
use sqlx::PgPool;
use suitable_core::roles::{ROLE_ADMIN, ROLE_MEMBER};
use suitable_core::setup::{AdminStatus, Setup, EXIT_FAILURE, EXIT_SUCCESS, FAILURE_PREFIX};
use suitable_db::migrations::MIGRATOR;
use suitable_db::models::user::CreateUser;
use suitable_db::repositories::{EventRepo, RoleRepo, UserRepo};
use suitable_db::seed::SAMPLE_EVENTS;
use suitable_setup::services::{PgAccounts, PgMigrations, PgSeeder};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn setup_for(pool: &PgPool) -> Setup<PgMigrations, PgAccounts, PgSeeder> {
    Setup::new(
        PgMigrations::new(pool.clone()),
        PgAccounts::new(pool.clone()),
        PgSeeder::new(pool.clone()),
    )
}

async fn execute(pool: &PgPool) -> (i32, String) {
    let mut out = Vec::new();
    let code = setup_for(pool).execute(&mut out).await;
    (code, String::from_utf8(out).expect("utf-8 output"))
}

async fn deactivate(pool: &PgPool, username: &str) {
    sqlx::query("UPDATE users SET is_active = false WHERE username = $1")
        .bind(username)
        .execute(pool)
        .await
        .unwrap();
}

fn password_matches(password: &str, hash: &str) -> bool {
    let parsed = PasswordHash::new(hash).expect("stored hash should be a PHC string");
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn fresh_database_is_fully_set_up(pool: PgPool) {
    let mut out = Vec::new();
    let outcome = setup_for(&pool)
        .run(&mut out)
        .await
        .expect("setup should succeed");

    assert_eq!(outcome.migrations_applied, MIGRATOR.iter().count());
    assert_eq!(outcome.seed.events_created, SAMPLE_EVENTS.len());

    let admin = match outcome.admin {
        AdminStatus::Created(account) => account,
        AdminStatus::AlreadyPresent => panic!("expected a new administrator"),
    };
    assert_eq!(admin.username, "admin");
    assert_eq!(admin.email, "admin@example.com");

    assert_eq!(UserRepo::count_by_role(&pool, ROLE_ADMIN).await.unwrap(), 1);
    let stored = UserRepo::find_by_username(&pool, "admin").await.unwrap().unwrap();
    assert!(password_matches("admin123", &stored.password_hash));
    assert!(!password_matches("admin1234", &stored.password_hash));
    assert_ne!(stored.password_hash, "admin123");

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("   Username: admin"));
    assert!(output.contains("Please change the password after first login!"));
}

#[sqlx::test(migrations = false)]
async fn second_run_is_idempotent(pool: PgPool) {
    let (first, _) = execute(&pool).await;
    let (second, output) = execute(&pool).await;

    assert_eq!(first, EXIT_SUCCESS);
    assert_eq!(second, EXIT_SUCCESS);
    assert_eq!(UserRepo::count_by_role(&pool, ROLE_ADMIN).await.unwrap(), 1);
    assert_eq!(EventRepo::count(&pool).await.unwrap(), SAMPLE_EVENTS.len() as i64);

    assert!(output.contains("Administrator account already exists"));
    assert!(output.contains("No pending migrations"));
    assert!(output.contains("Applied 0 migration(s)"));
    assert!(!output.contains("Password:"));
    assert!(!output.contains(FAILURE_PREFIX));
}

#[sqlx::test(migrations = false)]
async fn success_output_lists_next_steps(pool: PgPool) {
    let (code, output) = execute(&pool).await;

    assert_eq!(code, EXIT_SUCCESS);
    assert!(output.contains("1. Start the backend server: suitable-server"));
    assert!(output.contains("2. Access admin interface: http://localhost:8000/admin/"));
    assert!(output.contains("3. API endpoints available at: http://localhost:8000/api/"));
    assert!(output.contains("4. Update the Suitable mobile app to connect to: http://localhost:8000"));
}

#[sqlx::test(migrations = false)]
async fn deactivated_admin_under_other_name_blocks_creation(pool: PgPool) {
    suitable_db::run_migrations(&pool).await.unwrap();
    let admin = RoleRepo::find_by_name(&pool, ROLE_ADMIN).await.unwrap().unwrap();
    UserRepo::create(
        &pool,
        &CreateUser {
            username: "ops".to_string(),
            email: "ops@example.com".to_string(),
            password_hash: "x".to_string(),
            role_id: admin.id,
        },
    )
    .await
    .unwrap();
    deactivate(&pool, "ops").await;

    let (code, output) = execute(&pool).await;

    assert_eq!(code, EXIT_SUCCESS);
    assert!(output.contains("Administrator account already exists"));
    assert!(!output.contains("Password:"));
    assert_eq!(UserRepo::count_by_role(&pool, ROLE_ADMIN).await.unwrap(), 1);
    assert!(UserRepo::find_by_username(&pool, "admin").await.unwrap().is_none());
}

#[sqlx::test(migrations = false)]
async fn rerun_after_deactivating_default_admin_succeeds(pool: PgPool) {
    let (first, _) = execute(&pool).await;
    deactivate(&pool, "admin").await;

    let (second, output) = execute(&pool).await;

    assert_eq!(first, EXIT_SUCCESS);
    assert_eq!(second, EXIT_SUCCESS);
    assert!(output.contains("Administrator account already exists"));
    assert!(!output.contains(FAILURE_PREFIX));
    assert_eq!(UserRepo::count_by_role(&pool, ROLE_ADMIN).await.unwrap(), 1);
    let stored = UserRepo::find_by_username(&pool, "admin").await.unwrap().unwrap();
    assert!(!stored.is_active, "setup must not reactivate the account");
}

#[sqlx::test(migrations = false)]
async fn username_taken_by_member_fails_setup(pool: PgPool) {
    suitable_db::run_migrations(&pool).await.unwrap();
    let member = RoleRepo::find_by_name(&pool, ROLE_MEMBER).await.unwrap().unwrap();
    UserRepo::create(
        &pool,
        &CreateUser {
            username: "admin".to_string(),
            email: "someone@example.com".to_string(),
            password_hash: "x".to_string(),
            role_id: member.id,
        },
    )
    .await
    .unwrap();

    let (code, output) = execute(&pool).await;

    assert_eq!(code, EXIT_FAILURE);
    assert!(output.contains("Setup failed: Administrator creation failed: Conflict:"));
    assert_eq!(UserRepo::count_by_role(&pool, ROLE_ADMIN).await.unwrap(), 0);
    assert_eq!(EventRepo::count(&pool).await.unwrap(), 0, "seeding must not run");
}

#[sqlx::test(migrations = false)]
async fn tampered_history_stops_before_accounts(pool: PgPool) {
    suitable_db::run_migrations(&pool).await.unwrap();
    sqlx::query("UPDATE _sqlx_migrations SET checksum = '\\x00'::bytea WHERE version = $1")
        .bind(20250901000001_i64)
        .execute(&pool)
        .await
        .unwrap();

    let (code, output) = execute(&pool).await;

    assert_eq!(code, EXIT_FAILURE);
    assert!(output.contains("Setup failed: Migration generation failed"));
    assert!(!output.contains("Running database migrations..."));
    assert_eq!(UserRepo::count_by_role(&pool, ROLE_ADMIN).await.unwrap(), 0);
}
