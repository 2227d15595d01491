use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One document in a remote collection: an opaque store-assigned id plus a
/// JSON object of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(String),

    #[error("document {collection}/{id} does not exist")]
    NotFound { collection: String, id: String },
}

/// Minimal surface of the external managed document store.
///
/// Futures are `?Send` because the browser transport runs on a single-threaded
/// event loop and its futures are not `Send`.
#[async_trait(?Send)]
pub trait DocumentStore {
    /// Full enumeration of a collection, in store order (unspecified).
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Create a document; the store assigns the id and returns the result.
    async fn insert(&self, collection: &str, fields: Value) -> Result<Document, StoreError>;

    /// Partial merge: only the keys present in `fields` are written, other
    /// fields are left untouched. Fails for an unknown id.
    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<(), StoreError>;

    /// Remove a document. Deleting an absent id succeeds silently.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
