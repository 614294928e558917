//! `suitable-setup` -- one-shot database setup for the Suitable backend.
//!
//! Applies schema migrations, creates the first administrator account if
//! none exists, and seeds sample events. Takes no arguments; configuration
//! comes from the environment (see [`SetupConfig::from_env`]). Status lines
//! go to stdout, logs go to stderr.
//!
//! Exits with status 0 on success and 1 on any failure.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use suitable_core::setup::{write_failure, Setup, EXIT_FAILURE};
use suitable_setup::config::SetupConfig;
use suitable_setup::services::{PgAccounts, PgMigrations, PgSeeder};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "suitable_setup=info,suitable_db=info,suitable_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run().await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("Setup could not start: {err:#}");
            if let Err(write_err) = write_failure(&mut std::io::stdout(), format_args!("{err:#}")) {
                tracing::error!(error = %write_err, "Could not report setup failure");
            }
            EXIT_FAILURE
        }
    };

    std::process::exit(code);
}

/// Connect to the database and run the setup sequence.
///
/// Errors returned here happen before the sequence starts (configuration,
/// connectivity); failures inside the sequence are reported by
/// [`Setup::execute`] and come back as an exit status.
async fn run() -> anyhow::Result<i32> {
    let config = SetupConfig::from_env()?;
    tracing::info!(
        max_connections = config.max_connections,
        admin_username = %config.admin.username,
        "Loaded setup configuration"
    );

    let pool = suitable_db::create_pool(&config.database_url, config.max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    suitable_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    let setup = Setup::new(
        PgMigrations::new(pool.clone()),
        PgAccounts::new(pool.clone()),
        PgSeeder::new(pool.clone()),
    )
    .with_credentials(config.admin.clone())
    .with_next_steps(config.next_steps());

    let mut stdout = std::io::stdout().lock();
    let code = setup.execute(&mut stdout).await;
    drop(stdout);

    pool.close().await;
    Ok(code)
}
