//! The setup sequence and its console report.

use std::fmt;
use std::io::Write;

use super::credentials::AdminCredentials;
use super::error::SetupError;
use super::services::{
    AccountService, AdminAccount, MigrationPlan, MigrationService, SeedReport, SeedService,
};
use super::{EXIT_FAILURE, EXIT_SUCCESS, FAILURE_PREFIX};

pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SERVER_START_COMMAND: &str = "suitable-server";

/// Hints printed after a successful setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSteps {
    base_url: String,
    start_command: String,
}

impl NextSteps {
    /// Trailing slashes on `base_url` are dropped so paths join cleanly.
    pub fn new(base_url: impl Into<String>, start_command: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            start_command: start_command.into(),
        }
    }

    pub fn lines(&self) -> [String; 4] {
        let base = &self.base_url;
        [
            format!("1. Start the backend server: {}", self.start_command),
            format!("2. Access admin interface: {base}/admin/"),
            format!("3. API endpoints available at: {base}/api/"),
            format!("4. Update the Suitable mobile app to connect to: {base}"),
        ]
    }
}

impl Default for NextSteps {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_BASE_URL, DEFAULT_SERVER_START_COMMAND)
    }
}

/// What the admin stage did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminStatus {
    Created(AdminAccount),
    AlreadyPresent,
}

/// Everything a successful run reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOutcome {
    pub plan: MigrationPlan,
    pub migrations_applied: usize,
    pub admin: AdminStatus,
    pub seed: SeedReport,
}

/// Runs the setup stages in order against the given capabilities.
pub struct Setup<M, A, S> {
    migrations: M,
    accounts: A,
    seeder: S,
    credentials: AdminCredentials,
    next_steps: NextSteps,
}

impl<M, A, S> Setup<M, A, S>
where
    M: MigrationService,
    A: AccountService,
    S: SeedService,
{
    /// Build a setup with the default admin credentials and next-step hints.
    pub fn new(migrations: M, accounts: A, seeder: S) -> Self {
        Self {
            migrations,
            accounts,
            seeder,
            credentials: AdminCredentials::default(),
            next_steps: NextSteps::default(),
        }
    }

    pub fn with_credentials(mut self, credentials: AdminCredentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_next_steps(mut self, next_steps: NextSteps) -> Self {
        self.next_steps = next_steps;
        self
    }

    /// Run every stage, writing status lines to `out`.
    ///
    /// Stops at the first failing stage. Earlier stages are not undone.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<SetupOutcome, SetupError> {
        writeln!(out, "Setting up Suitable backend...")?;

        writeln!(out, "Checking database migrations...")?;
        let plan = self
            .migrations
            .generate()
            .await
            .map_err(SetupError::MigrationGenerate)?;
        tracing::info!(
            applied = plan.applied,
            pending = plan.pending.len(),
            "Migration plan generated"
        );
        if plan.is_up_to_date() {
            writeln!(out, "  No pending migrations")?;
        } else {
            for migration in &plan.pending {
                writeln!(out, "  - {} {}", migration.version, migration.description)?;
            }
        }

        writeln!(out, "Running database migrations...")?;
        let migrations_applied = self
            .migrations
            .apply()
            .await
            .map_err(SetupError::MigrationApply)?;
        writeln!(out, "  Applied {migrations_applied} migration(s)")?;

        let admin = self.ensure_admin(out).await?;

        writeln!(out, "Populating database with sample events...")?;
        let seed = self.seeder.populate().await.map_err(SetupError::Seed)?;
        tracing::info!(
            categories_created = seed.categories_created,
            events_created = seed.events_created,
            events_existing = seed.events_existing,
            "Sample data populated"
        );
        writeln!(
            out,
            "  {} event(s) created, {} already present",
            seed.events_created, seed.events_existing
        )?;

        writeln!(out)?;
        writeln!(out, "Setup completed successfully!")?;
        writeln!(out)?;
        writeln!(out, "Next steps:")?;
        for line in self.next_steps.lines() {
            writeln!(out, "{line}")?;
        }

        Ok(SetupOutcome {
            plan,
            migrations_applied,
            admin,
            seed,
        })
    }

    /// Run the sequence and turn the result into a process exit status.
    ///
    /// On failure a single `Setup failed: <cause chain>` line is written.
    pub async fn execute<W: Write>(&self, out: &mut W) -> i32 {
        match self.run(out).await {
            Ok(_) => EXIT_SUCCESS,
            Err(err) => {
                let stage = err.stage();
                let message = format!("{:#}", anyhow::Error::new(err));
                tracing::error!(%stage, error = %message, "Setup failed");
                if let Err(write_err) = write_failure(out, &message) {
                    tracing::error!(error = %write_err, "Could not report setup failure");
                }
                EXIT_FAILURE
            }
        }
    }

    async fn ensure_admin<W: Write>(&self, out: &mut W) -> Result<AdminStatus, SetupError> {
        let exists = self
            .accounts
            .has_admin()
            .await
            .map_err(SetupError::AccountCheck)?;

        if exists {
            writeln!(out, "Administrator account already exists")?;
            return Ok(AdminStatus::AlreadyPresent);
        }

        writeln!(out, "Creating administrator account...")?;
        let account = self
            .accounts
            .create_admin(&self.credentials)
            .await
            .map_err(SetupError::AccountCreate)?;
        tracing::info!(id = account.id, username = %account.username, "Administrator created");

        writeln!(out, "   Username: {}", self.credentials.username)?;
        writeln!(out, "   Email: {}", self.credentials.email)?;
        writeln!(out, "   Password: {}", self.credentials.password)?;
        writeln!(out, "   Please change the password after first login!")?;

        Ok(AdminStatus::Created(account))
    }
}

/// Write the single failure line: `Setup failed: <message>`.
pub fn write_failure<W: Write>(out: &mut W, message: impl fmt::Display) -> std::io::Result<()> {
    writeln!(out, "{FAILURE_PREFIX} {message}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
