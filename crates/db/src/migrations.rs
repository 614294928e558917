//! Embedded schema migrations.
//!
//! [`plan_migrations`] compares the SQL files compiled into [`MIGRATOR`]
//! against the `_sqlx_migrations` history, creating only that history table
//! if it is missing; [`run_migrations`] applies whatever is pending.

use std::collections::HashSet;

use sqlx::migrate::{Migrate, MigrateError, Migrator};
use sqlx::PgConnection;
use suitable_core::setup::{MigrationPlan, PendingMigration};

use crate::DbPool;

/// Migrations from `crates/db/migrations`, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Validate the recorded history and list migrations not yet applied.
///
/// Fails if a previous run left a migration half-applied, if an applied
/// migration is missing from the source, or if an applied migration's
/// checksum no longer matches its file.
pub async fn plan_migrations(pool: &DbPool) -> Result<MigrationPlan, MigrateError> {
    let mut pooled = pool.acquire().await?;
    let conn: &mut PgConnection = &mut pooled;

    conn.ensure_migrations_table().await?;

    if let Some(version) = conn.dirty_version().await? {
        return Err(MigrateError::Dirty(version));
    }

    let applied = conn.list_applied_migrations().await?;

    for recorded in &applied {
        let source = MIGRATOR
            .iter()
            .find(|m| m.version == recorded.version && !m.migration_type.is_down_migration());
        match source {
            None if !MIGRATOR.ignore_missing => {
                return Err(MigrateError::VersionMissing(recorded.version));
            }
            Some(migration) if migration.checksum != recorded.checksum => {
                return Err(MigrateError::VersionMismatch(recorded.version));
            }
            _ => {}
        }
    }

    let applied_versions: HashSet<i64> = applied.iter().map(|m| m.version).collect();
    let pending = MIGRATOR
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .filter(|m| !applied_versions.contains(&m.version))
        .map(|m| PendingMigration {
            version: m.version,
            description: m.description.to_string(),
        })
        .collect();

    Ok(MigrationPlan {
        applied: applied.len(),
        pending,
    })
}

/// Apply all pending migrations, returning how many were applied.
pub async fn run_migrations(pool: &DbPool) -> Result<usize, MigrateError> {
    let plan = plan_migrations(pool).await?;

    MIGRATOR.run(pool).await?;

    for migration in &plan.pending {
        tracing::info!(
            version = migration.version,
            description = %migration.description,
            "Applied migration"
        );
    }

    Ok(plan.pending.len())
}
