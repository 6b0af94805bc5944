//! Migrator owning the `ads` table.
//!
//! Every migration is written with `IF NOT EXISTS` so `Migrator::up` can run
//! on each process start against an existing store.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_ads;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_ads::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, ConnectionTrait, Database, Statement};

    #[tokio::test]
    async fn up_is_idempotent_and_creates_ads() -> anyhow::Result<()> {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opts).await?;
        Migrator::up(&db, None).await?;
        Migrator::up(&db, None).await?;

        let backend = db.get_database_backend();
        let row = db
            .query_one(Statement::from_string(
                backend,
                "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'ads'",
            ))
            .await?
            .expect("ads table exists");
        let sql: String = row.try_get("", "sql")?;
        assert!(sql.to_uppercase().contains("AUTOINCREMENT"));
        Ok(())
    }
}
