//! HTTP transport for the external document store.
//!
//! The store exposes one collection per path segment: listing and creating
//! documents go through `/api/store/{collection}`, updates and deletes
//! through `/api/store/{collection}/{id}`.

use async_trait::async_trait;
use datastore::store::{Document, DocumentStore, StoreError};
use gloo_net::http::Request;
use serde_json::Value;

/// Get the base URL of the document-store service.
///
/// Constructed from the current window location, using port 3000 for the
/// store endpoint. Returns an empty string if window is not available.
fn store_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

fn collection_url(collection: &str) -> String {
    format!("{}/api/store/{}", store_base(), collection)
}

fn document_url(collection: &str, id: &str) -> String {
    format!("{}/api/store/{}/{}", store_base(), collection, id)
}

fn transport(err: impl std::fmt::Display) -> StoreError {
    StoreError::Transport(err.to_string())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RestStore;

#[async_trait(?Send)]
impl DocumentStore for RestStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let response = Request::get(&collection_url(collection))
            .send()
            .await
            .map_err(transport)?;
        if !response.ok() {
            return Err(transport(format!("HTTP {}", response.status())));
        }
        response.json::<Vec<Document>>().await.map_err(transport)
    }

    async fn insert(&self, collection: &str, fields: Value) -> Result<Document, StoreError> {
        let response = Request::post(&collection_url(collection))
            .json(&fields)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !response.ok() {
            return Err(transport(format!("HTTP {}", response.status())));
        }
        response.json::<Document>().await.map_err(transport)
    }

    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<(), StoreError> {
        let response = Request::patch(&document_url(collection, id))
            .json(&fields)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if response.status() == 404 {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        if !response.ok() {
            return Err(transport(format!("HTTP {}", response.status())));
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let response = Request::delete(&document_url(collection, id))
            .send()
            .await
            .map_err(transport)?;
        // The store deletes absent documents silently; mirror that here.
        if !response.ok() && response.status() != 404 {
            return Err(transport(format!("HTTP {}", response.status())));
        }
        Ok(())
    }
}
