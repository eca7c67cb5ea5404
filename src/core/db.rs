use anyhow::{Context, Result, anyhow};
use diesel::{Connection, PgConnection};
use diesel_async::pooled_connection::bb8;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness};

use crate::core::{
    aliases::{DbConnectionManager, DbPool},
    config::Database,
};

/// Runs pending migrations on a blocking thread and returns how many were applied.
pub async fn run_migrations_blocking(migrations: EmbeddedMigrations, url: &str) -> Result<usize> {
    let url = url.to_string();

    tokio::task::spawn_blocking(move || -> Result<usize> {
        let mut conn =
            PgConnection::establish(&url).context("Failed to connect to the database")?;
        let applied = conn
            .run_pending_migrations(migrations)
            .map_err(|err| anyhow!("Failed to run migrations: {}", err))?;
        Ok(applied.len())
    })
    .await
    .context("Migration task panicked")?
}

pub async fn create_pool(database: &Database) -> Result<DbPool> {
    let manager = DbConnectionManager::new(&database.url);
    bb8::Pool::builder()
        .max_size(database.max_connections)
        .build(manager)
        .await
        .context("Failed to build the DB connection pool")
}
