use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::{error, info, instrument};

use super::domain::{Ad, CreateAdInput};
use super::repository::AdRepository;
use crate::errors::ServiceError;

/// Ad business service independent of web framework.
///
/// Generic over the repository so handlers can hold `AdService<dyn AdRepository>`
/// while tests plug in a concrete fake.
pub struct AdService<R: AdRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: AdRepository + ?Sized> AdService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub fn repository(&self) -> &Arc<R> { &self.repo }

    /// Validate, stamp `created_at` with the current UTC time and insert.
    ///
    /// # Examples
    /// ```
    /// use service::ads::{AdService, CreateAdInput, repository::mock::InMemoryAdRepository};
    /// use std::sync::Arc;
    /// let svc = AdService::new(Arc::new(InMemoryAdRepository::default()));
    /// let id = tokio_test::block_on(svc.create(CreateAdInput::new("Bike", "Used bike", "alice"))).unwrap();
    /// assert_eq!(id, 1);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateAdInput) -> Result<i64, ServiceError> {
        let valid = input.validate()?;
        let owner = valid.owner.clone();
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let id = self.repo.insert(valid.stamped(created_at)).await.inspect_err(log_storage)?;
        info!(id, %owner, "ad_created");
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Result<Ad, ServiceError> {
        self.repo
            .get_by_id(id)
            .await
            .inspect_err(log_storage)?
            .ok_or_else(|| ServiceError::not_found("Ad"))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if self.repo.delete_by_id(id).await.inspect_err(log_storage)? {
            info!(id, "ad_deleted");
            Ok(())
        } else {
            Err(ServiceError::not_found("Ad"))
        }
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        self.repo.count().await.inspect_err(log_storage)
    }
}

fn log_storage(e: &ServiceError) {
    if let ServiceError::Storage(msg) = e {
        error!(err = %msg, "ad storage failure");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ads::repository::mock::InMemoryAdRepository;
    use crate::test_support::sqlite_repo;
    use chrono::DateTime;

    fn memory_service() -> AdService<InMemoryAdRepository> {
        AdService::new(Arc::new(InMemoryAdRepository::default()))
    }

    #[tokio::test]
    async fn create_then_get_round_trips_fields() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        let id = svc.create(CreateAdInput::new("Bike", "Used bike", "alice")).await?;
        let ad = svc.get(id).await?;

        assert_eq!(ad.id, id);
        assert_eq!((ad.title.as_str(), ad.description.as_str(), ad.owner.as_str()), ("Bike", "Used bike", "alice"));
        let ts = DateTime::parse_from_rfc3339(&ad.created_at)?;
        assert!((Utc::now() - ts.with_timezone(&Utc)).num_seconds().abs() < 60);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_input_inserts_nothing() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        let err = svc.create(CreateAdInput::new("Bike", "", "alice")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(svc.count().await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let svc = memory_service();
        assert!(matches!(svc.get(1).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        let id = svc.create(CreateAdInput::new("Sofa", "Green sofa", "dan")).await?;
        svc.delete(id).await?;
        assert!(matches!(svc.get(id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_keeps_row_count() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        svc.create(CreateAdInput::new("Sofa", "Green sofa", "dan")).await?;
        assert!(matches!(svc.delete(17).await, Err(ServiceError::NotFound(_))));
        assert_eq!(svc.count().await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn sqlite_backed_service_follows_the_same_contract() -> Result<(), anyhow::Error> {
        let repo: Arc<dyn AdRepository> = Arc::new(sqlite_repo().await?);
        let svc: AdService<dyn AdRepository> = AdService::new(repo);

        let id = svc.create(CreateAdInput::new("Bike", "Used bike", "alice")).await?;
        assert_eq!(id, 1);
        assert_eq!(svc.get(id).await?.title, "Bike");
        svc.delete(id).await?;
        assert!(matches!(svc.get(id).await, Err(ServiceError::NotFound(_))));

        let next = svc.create(CreateAdInput::new("Desk", "Oak desk", "erin")).await?;
        assert_eq!(next, 2);
        Ok(())
    }
}
