use crate::models::Record;
use async_trait::async_trait;
use service_core::error::AppError;

/// Store operations needed by the handlers, one repository per record kind.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<T>, AppError>;

    /// First record whose name matches exactly.
    async fn find_by_name(&self, name: &str) -> Result<Option<T>, AppError>;

    /// Insert the record, or replace the stored one with the same id.
    async fn save(&self, record: &T) -> Result<(), AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
