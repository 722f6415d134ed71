use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::seed;

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    Ok(db)
}

/// Bring the schema to the state the configuration asks for.
///
/// `reset_on_start` drops and recreates every table, otherwise pending
/// migrations are applied. `seed_on_start` then loads the sample catalog.
pub async fn prepare(db: &DatabaseConnection, cfg: &DatabaseConfig) -> anyhow::Result<()> {
    if cfg.reset_on_start {
        migration::Migrator::fresh(db).await?;
        info!(event = "schema_reset", "catalog tables recreated");
    } else {
        migration::Migrator::up(db, None).await?;
    }
    if cfg.seed_on_start {
        let (services, versions) = seed::seed_catalog(db).await?;
        info!(event = "schema_seeded", services, versions, "sample catalog loaded");
    }
    Ok(())
}
