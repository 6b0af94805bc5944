use async_trait::async_trait;

use super::domain::{Ad, NewAd};
use crate::errors::ServiceError;

/// Persistence capability for ads.
///
/// Every method maps to a single statement against the store; no method
/// spans a transaction.
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Create the ads table if it is absent. Safe to call repeatedly.
    async fn initialize(&self) -> Result<(), ServiceError>;
    async fn insert(&self, new: NewAd) -> Result<i64, ServiceError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Ad>, ServiceError>;
    /// `true` when a row was removed, `false` when no such id existed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Rows {
        by_id: BTreeMap<i64, Ad>,
        last_id: i64,
    }

    /// Ids grow monotonically and are never handed out twice, matching the
    /// AUTOINCREMENT table.
    #[derive(Default)]
    pub struct InMemoryAdRepository {
        rows: Mutex<Rows>,
    }

    impl InMemoryAdRepository {
        fn lock(&self) -> Result<std::sync::MutexGuard<'_, Rows>, ServiceError> {
            self.rows.lock().map_err(ServiceError::storage)
        }
    }

    #[async_trait]
    impl AdRepository for InMemoryAdRepository {
        async fn initialize(&self) -> Result<(), ServiceError> {
            Ok(())
        }

        async fn insert(&self, new: NewAd) -> Result<i64, ServiceError> {
            new.validate()?;
            let mut rows = self.lock()?;
            rows.last_id += 1;
            let id = rows.last_id;
            let ad = Ad {
                id,
                title: new.title,
                description: new.description,
                created_at: new.created_at,
                owner: new.owner,
            };
            rows.by_id.insert(id, ad);
            Ok(id)
        }

        async fn get_by_id(&self, id: i64) -> Result<Option<Ad>, ServiceError> {
            Ok(self.lock()?.by_id.get(&id).cloned())
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock()?.by_id.remove(&id).is_some())
        }

        async fn count(&self) -> Result<u64, ServiceError> {
            Ok(self.lock()?.by_id.len() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::InMemoryAdRepository;
    use super::*;

    fn new_ad(title: &str) -> NewAd {
        NewAd {
            title: title.into(),
            description: "desc".into(),
            owner: "bob".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    #[tokio::test]
    async fn in_memory_repo_never_reuses_ids() -> Result<(), anyhow::Error> {
        let repo = InMemoryAdRepository::default();
        repo.initialize().await?;

        let a = repo.insert(new_ad("a")).await?;
        let b = repo.insert(new_ad("b")).await?;
        assert!(repo.delete_by_id(b).await?);
        let c = repo.insert(new_ad("c")).await?;

        assert_eq!((a, b, c), (1, 2, 3));
        assert_eq!(repo.count().await?, 2);
        assert!(repo.get_by_id(b).await?.is_none());
        assert_eq!(repo.get_by_id(c).await?.unwrap().title, "c");
        Ok(())
    }

    #[tokio::test]
    async fn in_memory_repo_delete_missing_is_false() -> Result<(), anyhow::Error> {
        let repo = InMemoryAdRepository::default();
        repo.insert(new_ad("a")).await?;
        assert!(!repo.delete_by_id(99).await?);
        assert_eq!(repo.count().await?, 1);
        Ok(())
    }
}
