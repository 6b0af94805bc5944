#![cfg(test)]
use crate::ads::repo::seaorm::SeaOrmAdRepository;
use crate::ads::repository::AdRepository;

/// SeaORM repository over a private in-memory SQLite store, already initialized.
pub async fn sqlite_repo() -> Result<SeaOrmAdRepository, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    let repo = SeaOrmAdRepository::new(db);
    repo.initialize().await?;
    Ok(repo)
}
