use std::fmt;

use super::services::ServiceError;

/// The stage of the setup sequence an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStage {
    GenerateMigrations,
    ApplyMigrations,
    EnsureAdmin,
    SeedSampleData,
    Report,
}

impl fmt::Display for SetupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GenerateMigrations => "generate_migrations",
            Self::ApplyMigrations => "apply_migrations",
            Self::EnsureAdmin => "ensure_admin",
            Self::SeedSampleData => "seed_sample_data",
            Self::Report => "report",
        };
        f.write_str(name)
    }
}

/// Failure of a single setup stage. The underlying cause is kept as the
/// error source.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Migration generation failed")]
    MigrationGenerate(#[source] ServiceError),

    #[error("Migration apply failed")]
    MigrationApply(#[source] ServiceError),

    #[error("Administrator lookup failed")]
    AccountCheck(#[source] ServiceError),

    #[error("Administrator creation failed")]
    AccountCreate(#[source] ServiceError),

    #[error("Sample data population failed")]
    Seed(#[source] ServiceError),

    #[error("Failed to write setup output")]
    Output(#[from] std::io::Error),
}

impl SetupError {
    pub fn stage(&self) -> SetupStage {
        match self {
            Self::MigrationGenerate(_) => SetupStage::GenerateMigrations,
            Self::MigrationApply(_) => SetupStage::ApplyMigrations,
            Self::AccountCheck(_) | Self::AccountCreate(_) => SetupStage::EnsureAdmin,
            Self::Seed(_) => SetupStage::SeedSampleData,
            Self::Output(_) => SetupStage::Report,
        }
    }
}
