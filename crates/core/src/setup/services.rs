//! Capability traits the setup sequence depends on, and the values they
//! report back.

use std::future::Future;

use crate::types::DbId;

use super::credentials::AdminCredentials;

/// Error type returned by every capability. The orchestrator wraps it in
/// the [`SetupError`](super::SetupError) variant for the failing stage.
pub type ServiceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A migration present in the source but not yet recorded in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMigration {
    pub version: i64,
    pub description: String,
}

/// Result of comparing the migration source against the recorded history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationPlan {
    /// Number of migrations already recorded as applied.
    pub applied: usize,
    /// Migrations still to run, in version order.
    pub pending: Vec<PendingMigration>,
}

impl MigrationPlan {
    pub fn is_up_to_date(&self) -> bool {
        self.pending.is_empty()
    }
}

/// The administrator account created by [`AccountService::create_admin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccount {
    pub id: DbId,
    pub username: String,
    pub email: String,
}

/// Row counts produced by one seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories_created: usize,
    pub events_created: usize,
    /// Sample events skipped because a row with the same title was present.
    pub events_existing: usize,
}

/// Schema migration engine.
pub trait MigrationService: Send + Sync {
    /// Validate the recorded history and list the pending migrations.
    fn generate(&self) -> impl Future<Output = Result<MigrationPlan, ServiceError>> + Send;

    /// Apply every pending migration, returning how many were applied.
    fn apply(&self) -> impl Future<Output = Result<usize, ServiceError>> + Send;
}

/// User accounts with elevated privileges.
pub trait AccountService: Send + Sync {
    /// Whether at least one administrator account exists.
    fn has_admin(&self) -> impl Future<Output = Result<bool, ServiceError>> + Send;

    /// Create an administrator account from `credentials`.
    fn create_admin(
        &self,
        credentials: &AdminCredentials,
    ) -> impl Future<Output = Result<AdminAccount, ServiceError>> + Send;
}

/// Sample-data population.
pub trait SeedService: Send + Sync {
    fn populate(&self) -> impl Future<Output = Result<SeedReport, ServiceError>> + Send;
}
