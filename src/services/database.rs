use std::time::Duration;

use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::{ClientOptions, FindOptions},
    Client as MongoClient, Collection, Database,
};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::DatabaseConfig;
use crate::error::AppError;

/// Upper bound on server selection so data routes and diagnostics answer
/// quickly when the store is unreachable, instead of hanging for the driver
/// default of 30s.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the document store.
///
/// When `DATABASE_URL` is unset the handle is unconfigured: the process still
/// starts and serves, every data operation fails with a database error, and
/// the diagnostic route reports the missing configuration in-band. The driver
/// establishes connections lazily, so building the handle never touches the
/// network.
#[derive(Clone)]
pub struct ConferenceDb {
    client: Option<MongoClient>,
    db: Option<Database>,
    db_name: String,
}

impl ConferenceDb {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let db_name = config.db_name_or_default().to_string();

        let Some(url) = config.url.as_ref() else {
            tracing::warn!("DATABASE_URL is not set; starting without a document store");
            return Ok(Self {
                client: None,
                db: None,
                db_name,
            });
        };

        let mut client_options = ClientOptions::parse(url.expose_secret())
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse MongoDB connection string: {}", e);
                AppError::DatabaseError(e.into())
            })?;
        client_options.app_name = Some("conference-service".to_string());
        client_options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::DatabaseError(e.into())
        })?;
        let db = client.database(&db_name);
        tracing::info!(database = %db_name, "Document store handle ready");

        Ok(Self {
            client: Some(client),
            db: Some(db),
            db_name,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.db.is_some()
    }

    pub fn name(&self) -> &str {
        &self.db_name
    }

    fn database(&self) -> Result<&Database, AppError> {
        self.db.as_ref().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!(
                "document store is not configured; set DATABASE_URL"
            ))
        })
    }

    fn collection(&self, name: &str) -> Result<Collection<Document>, AppError> {
        Ok(self.database()?.collection(name))
    }

    /// Insert one record and return the store-assigned identifier.
    pub async fn create_document<T: Serialize>(
        &self,
        collection: &str,
        document: &T,
    ) -> Result<ObjectId, AppError> {
        let doc = bson::to_document(document).map_err(|e| {
            tracing::error!("Failed to serialize document for {}: {}", collection, e);
            AppError::InternalError(e.into())
        })?;

        let result = self
            .collection(collection)?
            .insert_one(doc, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert into {}: {}", collection, e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!(
                "store did not assign an ObjectId to the inserted document"
            ))
        })
    }

    /// Fetch up to `limit` records from a collection, `None` for no cap.
    /// Order is whatever the store returns.
    pub async fn get_documents<T>(
        &self,
        collection: &str,
        limit: impl Into<Option<i64>>,
    ) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let limit: Option<i64> = limit.into();
        let options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .database()?
            .collection::<T>(collection)
            .find(doc! {}, options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query {}: {}", collection, e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect documents from {}: {}", collection, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        let client = self.client.as_ref().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!(
                "document store is not configured; set DATABASE_URL"
            ))
        })?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    pub async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.database()?.list_collection_names(None).await?)
    }
}
