use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// `(min, max)` pool size. Every SQLite memory connection is its own
/// database, so those pools are pinned to one connection.
pub(crate) fn pool_bounds(cfg: &DatabaseConfig) -> (u32, u32) {
    let url = cfg.url.to_lowercase();
    if cfg.is_sqlite() && (url.contains(":memory:") || url.contains("mode=memory")) {
        return (1, 1);
    }
    (cfg.min_connections, cfg.max_connections)
}

/// Open a pooled connection using the pool settings from `database` config.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let (min_connections, max_connections) = pool_bounds(cfg);
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(max_connections)
        .min_connections(min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    info!(backend = ?db.get_database_backend(), max_connections, "database connected");
    Ok(db)
}

/// Private in-memory SQLite store, migrated and ready to use.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    run_migrations(&db).await?;
    Ok(db)
}

pub async fn run_migrations(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    Ok(())
}
