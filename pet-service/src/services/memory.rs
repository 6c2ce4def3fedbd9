use crate::models::Record;
use crate::services::Repository;
use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::Mutex;

/// In-process repository for tests and local runs without MongoDB.
pub struct MemoryRepository<T> {
    records: Mutex<Vec<T>>,
    available: bool,
}

impl<T: Record> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            available: true,
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
            available: true,
        }
    }

    /// Repository whose every operation fails like a lost database.
    pub fn unavailable() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            available: false,
        }
    }

    pub fn snapshot(&self) -> Result<Vec<T>, AppError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<T>>, AppError> {
        if !self.available {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "{} store is unavailable",
                T::KIND
            )));
        }
        self.records.lock().map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Memory store mutex poisoned: {}", e))
        })
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, AppError> {
        self.snapshot()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<T>, AppError> {
        let records = self.lock()?;
        Ok(records.iter().find(|r| r.name() == name).cloned())
    }

    async fn save(&self, record: &T) -> Result<(), AppError> {
        let mut records = self.lock()?;
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cat;

    #[tokio::test]
    async fn save_inserts_then_replaces_by_id() {
        let repo = MemoryRepository::new();
        let mut cat = Cat::new("Anne Bonny".to_string(), 3);

        repo.save(&cat).await.unwrap();
        cat.add_bed().unwrap();
        repo.save(&cat).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].beds_owned, 4);
    }

    #[tokio::test]
    async fn find_by_name_is_exact() {
        let repo = MemoryRepository::with_records(vec![
            Cat::new("Anne Bonny".to_string(), 3),
            Cat::new("Mary Read".to_string(), 1),
        ]);

        let found = repo.find_by_name("Mary Read").await.unwrap().unwrap();
        assert_eq!(found.beds_owned, 1);
        assert!(repo.find_by_name("mary read").await.unwrap().is_none());
        assert!(repo.find_by_name("Mary").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let repo = MemoryRepository::<Cat>::unavailable();

        assert!(matches!(
            repo.find_all().await,
            Err(AppError::DatabaseError(_))
        ));
        assert!(repo.save(&Cat::placeholder()).await.is_err());
        assert!(repo.health_check().await.is_err());
    }
}
