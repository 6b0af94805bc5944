use async_trait::async_trait;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::ads::domain::{Ad, NewAd};
use crate::ads::repository::AdRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository over the SQLite `ads` table.
#[derive(Clone)]
pub struct SeaOrmAdRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAdRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl AdRepository for SeaOrmAdRepository {
    async fn initialize(&self) -> Result<(), ServiceError> {
        migration::Migrator::up(&self.db, None).await.map_err(ServiceError::storage)?;
        debug!("ads table ensured");
        Ok(())
    }

    async fn insert(&self, new: NewAd) -> Result<i64, ServiceError> {
        Ok(models::ad::create(&self.db, new).await?)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Ad>, ServiceError> {
        Ok(models::ad::find(&self.db, id).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::ad::delete(&self.db, id).await?)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(models::ad::count(&self.db).await?)
    }
}
