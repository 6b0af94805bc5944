

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory store with the schema applied.
pub(crate) async fn migrated_memory_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
