//! One-shot database setup for a fresh or existing deployment.
//!
//! [`Setup`] sequences four capabilities in strict order: generate the
//! migration plan, apply pending migrations, ensure an administrator
//! account exists, and seed sample data. The first failing stage aborts
//! the run; nothing is rolled back.
//!
//! The capabilities are traits ([`MigrationService`], [`AccountService`],
//! [`SeedService`]) so the sequence can run against PostgreSQL in the
//! binary and against in-memory fakes in tests.

pub mod credentials;
pub mod error;
pub mod orchestrator;
pub mod services;

pub use credentials::AdminCredentials;
pub use error::{SetupError, SetupStage};
pub use orchestrator::{write_failure, AdminStatus, NextSteps, Setup, SetupOutcome};
pub use services::{
    AccountService, AdminAccount, MigrationPlan, MigrationService, PendingMigration, SeedReport,
    SeedService, ServiceError,
};

/// Process exit status for a completed setup.
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit status for any failed setup.
pub const EXIT_FAILURE: i32 = 1;

/// Prefix of the single line printed when setup fails.
pub const FAILURE_PREFIX: &str = "Setup failed:";
