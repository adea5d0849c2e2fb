//! survey-mongo — MongoDB store gateway for survey-intake.
//!
//! [`MongoStore`] implements [`SurveyStore`] with one `insert_one` per
//! submission. The driver's client is pooled internally and shared by all
//! requests; no retries are attempted here.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use survey_core::config::StoreConfig;
use survey_core::{StoreError, SurveyDocument, SurveyStore};

/// Name reported to the server in the connection handshake.
const APP_NAME: &str = "survey-intake";

/// Database the liveness ping is sent to.
const ADMIN_DATABASE: &str = "admin";

/// Store gateway backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    collection: Collection<Document>,
}

impl MongoStore {
    /// Build a client for `config.uri`.
    ///
    /// The driver connects lazily, so this only fails on an unparseable URI
    /// or invalid options. Use [`SurveyStore::ping`] to check reachability.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|err| StoreError::Connection(err.to_string()))?;
        options.app_name = Some(APP_NAME.to_string());
        options.server_selection_timeout =
            Some(Duration::from_millis(config.server_selection_timeout_ms));

        let client =
            Client::with_options(options).map_err(|err| StoreError::Connection(err.to_string()))?;
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        tracing::debug!(
            database = %config.database,
            collection = %config.collection,
            "mongodb client created"
        );
        Ok(Self { client, collection })
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

#[async_trait]
impl SurveyStore for MongoStore {
    async fn insert_one(&self, document: &SurveyDocument) -> Result<String, StoreError> {
        let encoded = to_bson_document(document)?;
        let result = self
            .collection
            .insert_one(encoded)
            .await
            .map_err(|err| StoreError::Insert(err.to_string()))?;

        Ok(match result.inserted_id {
            Bson::ObjectId(id) => id.to_hex(),
            other => other.to_string(),
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database(ADMIN_DATABASE)
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|err| StoreError::Connection(err.to_string()))
    }
}

/// Encode a document for insertion.
///
/// `created_at` is stored as a native BSON datetime rather than the RFC 3339
/// string the generic serializer would produce.
pub fn to_bson_document(document: &SurveyDocument) -> Result<Document, StoreError> {
    let mut encoded =
        bson::to_document(document).map_err(|err| StoreError::Encode(err.to_string()))?;
    encoded.insert(
        "created_at",
        Bson::DateTime(bson::DateTime::from_millis(
            document.created_at.timestamp_millis(),
        )),
    );
    Ok(encoded)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
