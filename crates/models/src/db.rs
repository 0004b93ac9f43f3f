use std::time::Duration;

use configs::{DatabaseConfig, DEFAULT_DATABASE_URL};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection};
use tracing::info;

use crate::{offer, order, user};

// An in-memory SQLite database lives exactly as long as the connection that
// opened it, so that connection must never be recycled by the pool.
const MEMORY_KEEPALIVE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_in_memory() {
        opts.max_connections(1)
            .min_connections(1)
            .idle_timeout(MEMORY_KEEPALIVE)
            .max_lifetime(MEMORY_KEEPALIVE);
    } else {
        opts.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs));
    }
    opts
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    if db.get_database_backend() == DatabaseBackend::Sqlite {
        // ON DELETE SET NULL relies on it
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    }
    Ok(db)
}

/// Create the tables if they are missing. The process starts from an empty
/// store, so this is the whole schema lifecycle.
pub async fn create_tables(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    info!(event = "schema_ready", "user/order/offer tables ready");
    Ok(())
}

/// Postgres statement moving a table's `SERIAL` sequence past its highest id.
pub fn resync_sequence_sql(table: &str) -> String {
    format!(
        r#"SELECT setval(pg_get_serial_sequence('"{t}"', 'id'), COALESCE((SELECT MAX(id) FROM "{t}"), 0) + 1, false)"#,
        t = table
    )
}

/// Rows written with explicit ids leave a Postgres sequence behind, so the
/// next generated id would collide. SQLite `AUTOINCREMENT` already tracks the
/// highest id, so this is a no-op there.
pub async fn resync_id_sequences(db: &DatabaseConnection) -> anyhow::Result<()> {
    if db.get_database_backend() != DatabaseBackend::Postgres {
        return Ok(());
    }
    for table in [user::ENTITY, order::ENTITY, offer::ENTITY] {
        db.execute_unprepared(&resync_sequence_sql(table)).await?;
    }
    info!(event = "sequences_resynced", "id sequences moved past seeded ids");
    Ok(())
}

/// Fresh, empty, migrated in-memory store.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: DEFAULT_DATABASE_URL.to_string(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    create_tables(&db).await?;
    Ok(db)
}
