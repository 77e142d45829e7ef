//! Persistence layer for both API variants.
//!
//! Owns the SQLite connection pool, the embedded schema migrations, the
//! reference seed data, the row models and the repositories.

pub mod models;
pub mod repositories;

mod query;

use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub type DbPool = sqlx::SqlitePool;

/// Embedded migrations for the lore database.
pub static LORE_MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations/lore");

/// Embedded migrations for the catalog database.
pub static CATALOG_MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations/catalog");

/// Which of the two independent databases a pool is connected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Lore,
    Catalog,
}

impl Schema {
    pub fn name(self) -> &'static str {
        match self {
            Schema::Lore => "lore",
            Schema::Catalog => "catalog",
        }
    }

    pub fn migrator(self) -> &'static Migrator {
        match self {
            Schema::Lore => &LORE_MIGRATOR,
            Schema::Catalog => &CATALOG_MIGRATOR,
        }
    }

    fn seed_sql(self) -> &'static str {
        match self {
            Schema::Lore => include_str!("../../../db/seeds/lore.sql"),
            Schema::Catalog => include_str!("../../../db/seeds/catalog.sql"),
        }
    }

    /// Row count that is zero only in a freshly migrated database.
    fn seed_probe(self) -> &'static str {
        match self {
            Schema::Lore => "SELECT COUNT(*) FROM episodes",
            Schema::Catalog => "SELECT COUNT(*) FROM products",
        }
    }
}

/// Create a connection pool from a database URL such as `sqlite://data/app.db`.
///
/// The database file is created if missing and foreign keys are enforced on
/// every connection.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to verify connectivity.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations for `schema`.
pub async fn run_migrations(pool: &DbPool, schema: Schema) -> Result<(), MigrateError> {
    schema.migrator().run(pool).await
}

/// Load the reference data set into an empty database.
///
/// Returns `false` without touching anything when the schema already holds
/// rows. The whole script runs in one transaction.
pub async fn seed_if_empty(pool: &DbPool, schema: Schema) -> Result<bool, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar(schema.seed_probe())
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!(schema = schema.name(), existing, "Seed skipped, schema not empty");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    sqlx::raw_sql(schema.seed_sql()).execute(&mut *tx).await?;
    tx.commit().await?;

    tracing::info!(schema = schema.name(), "Seed data applied");
    Ok(true)
}
