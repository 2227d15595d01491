use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::store::{Document, DocumentStore, StoreError};

/// In-memory [`DocumentStore`] with the same observable semantics as the
/// remote service: store-assigned opaque ids, partial-merge updates, silent
/// delete-of-absent. Clones share the same underlying collections, which lets
/// a test hold one handle while the repository under test holds another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Rc<RefCell<BTreeMap<String, Vec<Document>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document count of one collection, for write/no-write assertions.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .borrow()
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait(?Send)]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .collections
            .borrow()
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn insert(&self, collection: &str, fields: Value) -> Result<Document, StoreError> {
        let document = Document {
            id: Uuid::new_v4().to_string(),
            fields,
        };
        self.collections
            .borrow_mut()
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());
        Ok(document)
    }

    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<(), StoreError> {
        let mut collections = self.collections.borrow_mut();
        let document = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        // Partial merge: only the submitted keys change.
        if let (Value::Object(existing), Value::Object(incoming)) = (&mut document.fields, fields) {
            for (key, value) in incoming {
                existing.insert(key, value);
            }
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        if let Some(docs) = self.collections.borrow_mut().get_mut(collection) {
            docs.retain(|doc| doc.id != id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let store = MemoryStore::new();
        let a = store.insert("faqs", json!({"question": "Q"})).await.unwrap();
        let b = store.insert("faqs", json!({"question": "Q"})).await.unwrap();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_update_merges_only_submitted_keys() {
        let store = MemoryStore::new();
        let doc = store
            .insert("faqs", json!({"question": "Q1", "answer": "A1"}))
            .await
            .unwrap();

        store
            .update("faqs", &doc.id, json!({"answer": "A2"}))
            .await
            .unwrap();

        let docs = store.list("faqs").await.unwrap();
        assert_eq!(docs[0].fields, json!({"question": "Q1", "answer": "A2"}));
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        let store = MemoryStore::new();
        let result = store.update("faqs", "missing", json!({})).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_of_absent_succeeds() {
        let store = MemoryStore::new();
        store.delete("faqs", "missing").await.unwrap();
    }
}
