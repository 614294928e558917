//! PostgreSQL-backed implementations of the setup capabilities.
//!
//! Each adapter holds a clone of the shared pool and delegates to
//! `suitable_db`.

use suitable_core::error::CoreError;
use suitable_core::roles::ROLE_ADMIN;
use suitable_core::setup::{
    AccountService, AdminAccount, AdminCredentials, MigrationPlan, MigrationService, SeedReport,
    SeedService, ServiceError,
};
use suitable_db::models::user::CreateUser;
use suitable_db::repositories::{RoleRepo, UserRepo};
use suitable_db::DbPool;

use crate::password::{hash_password, password_warning};

/// Embedded sqlx migrations.
#[derive(Clone)]
pub struct PgMigrations {
    pool: DbPool,
}

impl PgMigrations {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl MigrationService for PgMigrations {
    async fn generate(&self) -> Result<MigrationPlan, ServiceError> {
        Ok(suitable_db::plan_migrations(&self.pool).await?)
    }

    async fn apply(&self) -> Result<usize, ServiceError> {
        Ok(suitable_db::run_migrations(&self.pool).await?)
    }
}

/// Administrator accounts stored in the `users` table.
#[derive(Clone)]
pub struct PgAccounts {
    pool: DbPool,
}

impl PgAccounts {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl AccountService for PgAccounts {
    async fn has_admin(&self) -> Result<bool, ServiceError> {
        Ok(UserRepo::exists_with_role(&self.pool, ROLE_ADMIN).await?)
    }

    async fn create_admin(
        &self,
        credentials: &AdminCredentials,
    ) -> Result<AdminAccount, ServiceError> {
        if let Some(reason) = password_warning(&credentials.password) {
            tracing::warn!(username = %credentials.username, %reason, "Weak administrator password");
        }

        let role = RoleRepo::find_by_name(&self.pool, ROLE_ADMIN)
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity: "role",
                key: ROLE_ADMIN.to_string(),
            })?;

        if UserRepo::find_by_username(&self.pool, &credentials.username)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "user '{}' exists without the admin role",
                credentials.username
            ))
            .into());
        }

        let password_hash = hash_password(&credentials.password)
            .map_err(|e| format!("Failed to hash administrator password: {e}"))?;
        let user = UserRepo::create(
            &self.pool,
            &CreateUser {
                username: credentials.username.clone(),
                email: credentials.email.clone(),
                password_hash,
                role_id: role.id,
            },
        )
        .await?;

        Ok(AdminAccount {
            id: user.id,
            username: user.username,
            email: user.email,
        })
    }
}

/// Sample events seeded through `suitable_db::seed`.
#[derive(Clone)]
pub struct PgSeeder {
    pool: DbPool,
}

impl PgSeeder {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl SeedService for PgSeeder {
    async fn populate(&self) -> Result<SeedReport, ServiceError> {
        Ok(suitable_db::seed::populate_sample_data(&self.pool).await?)
    }
}
