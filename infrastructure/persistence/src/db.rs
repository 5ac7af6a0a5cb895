use sqlx::{PgPool, migrate::MigrateError, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migrations_missing: {0}")]
    MigrationsMissing(String),
    #[error("database.migration_error")]
    MigrationError(#[from] MigrateError),
}

/// Connection pool settings.
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(DatabaseError::ConnectionError)?;

    tracing::info!(
        target: "PromptPrint -- ",
        "connected to postgres (max {} connections)",
        config.max_connections
    );
    Ok(pool)
}

/// Applies pending migrations, schema first and then the catalog seed.
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.is_dir() {
        return Err(DatabaseError::MigrationsMissing(migrations_path.to_string()));
    }

    let migrator = sqlx::migrate::Migrator::new(path).await?;
    migrator.run(pool).await?;

    tracing::info!(target: "PromptPrint -- ", "migrations applied from {}", migrations_path);
    Ok(())
}
