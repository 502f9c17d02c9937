//! Schema migrations
//!
//! Migrations are read from disk at runtime so the crate builds without a
//! live database.

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;

/// Migrations shipped with this crate
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply every pending migration found in `dir`
pub async fn run_migrations(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), MigrateError> {
    let dir = dir.as_ref();
    let migrator = Migrator::new(dir).await?;

    tracing::info!(
        dir = %dir.display(),
        migrations = migrator.iter().count(),
        "Applying database migrations"
    );

    migrator.run(pool).await
}
