use crate::models::Record;
use crate::services::Repository;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReplaceOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn repository<T: Record>(&self) -> MongoRepository<T> {
        MongoRepository {
            db: self.clone(),
            collection: self.db.collection(T::COLLECTION),
        }
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[derive(Clone)]
pub struct MongoRepository<T: Record> {
    db: MongoDb,
    collection: Collection<T>,
}

impl<T: Record> MongoRepository<T> {
    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .name(format!("{}_name_lookup", T::KIND))
                    .build(),
            )
            .build();

        self.collection
            .create_index(name_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create name index on {} collection: {}",
                    T::COLLECTION,
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on {}.name", T::COLLECTION);

        Ok(())
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MongoRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, AppError> {
        let cursor = self.collection.find(doc! {}, None).await?;
        let records: Vec<T> = cursor.try_collect().await?;
        Ok(records)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<T>, AppError> {
        let record = self
            .collection
            .find_one(doc! { "name": name }, None)
            .await?;
        Ok(record)
    }

    async fn save(&self, record: &T) -> Result<(), AppError> {
        let options = ReplaceOptions::builder().upsert(true).build();
        self.collection
            .replace_one(doc! { "_id": record.id() }, record, options)
            .await?;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}
