//! Document store gateway.
//!
//! The process holds a single optional MongoDB handle, created once at
//! startup. Every operation pattern-matches on presence; an absent handle
//! yields `StoreError::NotConnected`, never a panic.

use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Database};
use tracing::{info, warn};

use crate::errors::StoreError;

/// Gateway over a document database that may or may not be connected.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document into the named collection; returns the
    /// generated identifier.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, StoreError>;

    /// Fetch up to `limit` documents from the named collection. Order is
    /// store-defined.
    async fn find_many(&self, collection: &str, limit: i64) -> Result<Vec<Document>, StoreError>;

    /// List collection names, for connectivity diagnostics.
    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;
}

/// MongoDB-backed store holding an optional database handle.
pub struct MongoStore {
    db: Option<Database>,
}

impl MongoStore {
    pub fn new(db: Option<Database>) -> Self {
        Self { db }
    }

    /// A store with no live connection; every operation reports
    /// `NotConnected`.
    pub fn disconnected() -> Self {
        Self { db: None }
    }

    fn db(&self) -> Result<&Database, StoreError> {
        self.db.as_ref().ok_or(StoreError::NotConnected)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let db = self.db()?;
        let res = db
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let id = match res.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => res.inserted_id.to_string(),
        };
        Ok(id)
    }

    async fn find_many(&self, collection: &str, limit: i64) -> Result<Vec<Document>, StoreError> {
        let db = self.db()?;
        let mut cursor = db
            .collection::<Document>(collection)
            .find(doc! {})
            .limit(limit)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let mut docs = Vec::new();
        while cursor.advance().await.map_err(|e| StoreError::Backend(e.to_string()))? {
            docs.push(
                cursor
                    .deserialize_current()
                    .map_err(|e| StoreError::Backend(e.to_string()))?,
            );
        }
        Ok(docs)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let db = self.db()?;
        db.list_collection_names()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

/// Build the process-wide store from configuration.
///
/// An unset or unparsable connection string yields a disconnected store;
/// startup never fails on a missing database.
pub async fn connect(cfg: &configs::DatabaseConfig) -> MongoStore {
    if !cfg.is_configured() {
        warn!("DATABASE_URL or DATABASE_NAME not set; store starts disconnected");
        return MongoStore::disconnected();
    }
    match Client::with_uri_str(&cfg.url).await {
        Ok(client) => {
            info!(database = %cfg.name, "database handle initialized");
            MongoStore::new(Some(client.database(&cfg.name)))
        }
        Err(e) => {
            warn!(error = %e, "failed to initialize database client; store starts disconnected");
            MongoStore::disconnected()
        }
    }
}
