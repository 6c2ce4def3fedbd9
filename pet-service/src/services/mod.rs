pub mod database;
pub mod last_record;
pub mod memory;
pub mod metrics;
pub mod repository;

pub use database::{MongoDb, MongoRepository};
pub use last_record::LastRecord;
pub use memory::MemoryRepository;
pub use metrics::{get_metrics, init_metrics};
pub use repository::Repository;
