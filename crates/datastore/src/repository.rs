use contracts::category::{Category, CategoryDraft, DEFAULT_CATEGORIES};
use contracts::faq::{FaqDraft, FaqItem, FaqPatch, DEFAULT_CATEGORY};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::DataError;
use crate::store::{Document, DocumentStore, StoreError};

const FAQ_COLLECTION: &str = "faqs";
const CATEGORY_COLLECTION: &str = "categories";

const VALIDATION_MESSAGE: &str = "Please fill in both question and answer";

/// Repository facade: every operation is one remote call (plus the documented
/// seeding and existence-check reads). Holds no state of its own — the views
/// keep their own copies of the fetched collections and patch them after each
/// successful write.
#[derive(Debug, Clone)]
pub struct FaqRepository<S> {
    store: S,
}

impl<S: DocumentStore> FaqRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Full unordered FAQ collection. All filtering happens client-side after
    /// this fetch; there is no pagination.
    pub async fn list_faqs(&self) -> Result<Vec<FaqItem>, DataError> {
        let docs = self
            .store
            .list(FAQ_COLLECTION)
            .await
            .map_err(DataError::RemoteRead)?;
        docs.into_iter()
            .map(|doc| decode(doc).map_err(DataError::RemoteRead))
            .collect()
    }

    /// All categories, ordered by name. An empty collection is seeded with
    /// the five default names and then re-read; the result of that re-read is
    /// returned as-is. Two callers racing on first access will both observe
    /// an empty collection and both seed — the check and the inserts are not
    /// atomic.
    pub async fn list_categories(&self) -> Result<Vec<Category>, DataError> {
        let docs = self
            .store
            .list(CATEGORY_COLLECTION)
            .await
            .map_err(DataError::RemoteRead)?;

        let docs = if docs.is_empty() {
            for name in DEFAULT_CATEGORIES {
                let fields = encode(&CategoryDraft {
                    name: name.to_string(),
                })?;
                self.store
                    .insert(CATEGORY_COLLECTION, fields)
                    .await
                    .map_err(DataError::RemoteWrite)?;
            }
            self.store
                .list(CATEGORY_COLLECTION)
                .await
                .map_err(DataError::RemoteRead)?
        } else {
            docs
        };

        let mut categories = docs
            .into_iter()
            .map(|doc| decode::<Category>(doc).map_err(DataError::RemoteRead))
            .collect::<Result<Vec<_>, _>>()?;
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    /// Create one FAQ and return it with its store-assigned id. A blank
    /// category falls back to "General".
    pub async fn add_faq(&self, mut draft: FaqDraft) -> Result<FaqItem, DataError> {
        if draft.question.trim().is_empty() || draft.answer.trim().is_empty() {
            return Err(DataError::Validation(VALIDATION_MESSAGE.to_string()));
        }
        if draft.category.trim().is_empty() {
            draft.category = DEFAULT_CATEGORY.to_string();
        }

        let doc = self
            .store
            .insert(FAQ_COLLECTION, encode(&draft)?)
            .await
            .map_err(DataError::RemoteWrite)?;
        Ok(FaqItem {
            id: doc.id,
            question: draft.question,
            answer: draft.answer,
            category: draft.category,
        })
    }

    /// Partial merge: only the fields present in the patch are written. A
    /// field submitted as empty text fails validation the same way an empty
    /// submission does.
    pub async fn update_faq(&self, id: &str, patch: &FaqPatch) -> Result<(), DataError> {
        let blank = |field: &Option<String>| {
            field
                .as_ref()
                .map(|value| value.trim().is_empty())
                .unwrap_or(false)
        };
        if blank(&patch.question) || blank(&patch.answer) {
            return Err(DataError::Validation(VALIDATION_MESSAGE.to_string()));
        }
        if patch.is_empty() {
            return Ok(());
        }

        self.store
            .update(FAQ_COLLECTION, id, encode(patch)?)
            .await
            .map_err(DataError::RemoteWrite)
    }

    /// Idempotent at the transport layer: deleting an id that no longer
    /// exists succeeds silently.
    pub async fn delete_faq(&self, id: &str) -> Result<(), DataError> {
        self.store
            .delete(FAQ_COLLECTION, id)
            .await
            .map_err(DataError::RemoteWrite)
    }

    /// Best-effort uniqueness: one existence read, then the insert. The two
    /// steps are not transactional, so concurrent callers can both pass the
    /// check and both insert. Name comparison is trimmed and
    /// case-insensitive.
    pub async fn add_category(&self, name: &str) -> Result<Category, DataError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DataError::Validation(
                "Please enter a category name".to_string(),
            ));
        }

        let existing = self
            .store
            .list(CATEGORY_COLLECTION)
            .await
            .map_err(DataError::RemoteRead)?;
        let taken = existing.into_iter().any(|doc| {
            decode::<Category>(doc)
                .map(|category| category.name.trim().eq_ignore_ascii_case(name))
                .unwrap_or(false)
        });
        if taken {
            return Err(DataError::DuplicateCategory(name.to_string()));
        }

        let doc = self
            .store
            .insert(
                CATEGORY_COLLECTION,
                encode(&CategoryDraft {
                    name: name.to_string(),
                })?,
            )
            .await
            .map_err(DataError::RemoteWrite)?;
        Ok(Category {
            id: doc.id,
            name: name.to_string(),
        })
    }

    /// Removes the category only. FAQs referencing its name keep the label
    /// and simply render it as plain text.
    pub async fn delete_category(&self, id: &str) -> Result<(), DataError> {
        self.store
            .delete(CATEGORY_COLLECTION, id)
            .await
            .map_err(DataError::RemoteWrite)
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Value, DataError> {
    serde_json::to_value(value)
        .map_err(|e| DataError::RemoteWrite(StoreError::Transport(e.to_string())))
}

/// Fold the store-assigned id back into the document fields so entity types
/// deserialize in one step.
fn decode<T: DeserializeOwned>(doc: Document) -> Result<T, StoreError> {
    let mut fields = doc.fields;
    if let Value::Object(map) = &mut fields {
        map.insert("id".to_string(), Value::String(doc.id));
    }
    serde_json::from_value(fields).map_err(|e| StoreError::Transport(format!("malformed document: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde_json::json;

    fn repository() -> (FaqRepository<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        (FaqRepository::new(store.clone()), store)
    }

    fn draft(question: &str, answer: &str, category: &str) -> FaqDraft {
        FaqDraft {
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_faq_assigns_id_and_appears_in_list() {
        let (repo, _) = repository();

        let created = repo.add_faq(draft("Q1", "A1", "General")).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.question, "Q1");
        assert_eq!(created.answer, "A1");
        assert_eq!(created.category, "General");

        let listed = repo.list_faqs().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_add_faq_defaults_blank_category() {
        let (repo, _) = repository();
        let created = repo.add_faq(draft("Q", "A", "  ")).await.unwrap();
        assert_eq!(created.category, "General");
    }

    #[tokio::test]
    async fn test_add_faq_rejects_empty_question_or_answer_without_writing() {
        let (repo, store) = repository();

        for (question, answer) in [("", "A"), ("Q", ""), ("   ", "A")] {
            let result = repo.add_faq(draft(question, answer, "General")).await;
            assert!(matches!(result, Err(DataError::Validation(_))));
        }
        assert!(store.is_empty("faqs"));
    }

    #[tokio::test]
    async fn test_update_faq_changes_only_patched_fields() {
        let (repo, _) = repository();
        let created = repo.add_faq(draft("Q1", "A1", "Billing")).await.unwrap();

        repo.update_faq(
            &created.id,
            &FaqPatch {
                answer: Some("A2".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let listed = repo.list_faqs().await.unwrap();
        assert_eq!(listed[0].question, "Q1");
        assert_eq!(listed[0].answer, "A2");
        assert_eq!(listed[0].category, "Billing");
    }

    #[tokio::test]
    async fn test_update_faq_rejects_empty_patched_text() {
        let (repo, _) = repository();
        let created = repo.add_faq(draft("Q1", "A1", "General")).await.unwrap();

        let result = repo
            .update_faq(
                &created.id,
                &FaqPatch {
                    answer: Some("   ".into()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(DataError::Validation(_))));
    }

    #[tokio::test]
    async fn test_empty_patch_is_a_no_op_without_a_store_call() {
        let (repo, _) = repository();

        // An unknown id would surface a write error if the store were hit;
        // an empty patch returns before any remote call is made.
        repo.update_faq("missing", &FaqPatch::default()).await.unwrap();

        let created = repo.add_faq(draft("Q1", "A1", "General")).await.unwrap();
        repo.update_faq(&created.id, &FaqPatch::default())
            .await
            .unwrap();
        assert_eq!(repo.list_faqs().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_update_faq_unknown_id_is_a_write_error() {
        let (repo, _) = repository();
        let result = repo
            .update_faq(
                "missing",
                &FaqPatch {
                    answer: Some("A".into()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(DataError::RemoteWrite(_))));
    }

    #[tokio::test]
    async fn test_delete_faq_twice_does_not_error() {
        let (repo, _) = repository();
        let created = repo.add_faq(draft("Q", "A", "General")).await.unwrap();

        repo.delete_faq(&created.id).await.unwrap();
        repo.delete_faq(&created.id).await.unwrap();

        assert!(repo.list_faqs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_category_collection_is_seeded_once_sorted_by_name() {
        let (repo, store) = repository();

        let categories = repo.list_categories().await.unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Account", "Billing", "General", "Payments", "Technical"]
        );

        // A second read must not reseed.
        repo.list_categories().await.unwrap();
        assert_eq!(store.len("categories"), 5);
    }

    #[tokio::test]
    async fn test_duplicate_category_is_rejected_without_writing() {
        let (repo, store) = repository();
        repo.list_categories().await.unwrap();

        let result = repo.add_category("Billing").await;
        assert!(matches!(result, Err(DataError::DuplicateCategory(_))));
        assert_eq!(store.len("categories"), 5);

        // The existence check ignores case and surrounding whitespace.
        let result = repo.add_category("  billing ").await;
        assert!(matches!(result, Err(DataError::DuplicateCategory(_))));
        assert_eq!(store.len("categories"), 5);
    }

    #[tokio::test]
    async fn test_check_then_insert_is_not_atomic_across_repositories() {
        // Two clients sharing one store: both pass the existence check before
        // either inserts, so both inserts land. This mirrors the remote
        // store, which offers no uniqueness constraint.
        let store = MemoryStore::new();
        let first = FaqRepository::new(store.clone());
        let second = FaqRepository::new(store.clone());

        // Simulate interleaving by inserting behind the second client's back
        // after its check would have passed: direct store write, no check.
        first.add_category("Shipping").await.unwrap();
        store
            .insert("categories", json!({"name": "Shipping"}))
            .await
            .unwrap();

        let names: Vec<String> = second
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names.iter().filter(|n| *n == "Shipping").count(), 2);
    }

    #[tokio::test]
    async fn test_delete_category_leaves_referencing_faqs_untouched() {
        let (repo, _) = repository();
        repo.add_faq(draft("Q", "A", "Billing")).await.unwrap();
        let billing = repo
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Billing")
            .unwrap();

        repo.delete_category(&billing.id).await.unwrap();

        let faqs = repo.list_faqs().await.unwrap();
        assert_eq!(faqs[0].category, "Billing");
        let names: Vec<String> = repo
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert!(!names.contains(&"Billing".to_string()));
    }

    #[tokio::test]
    async fn test_faq_document_without_category_lists_as_general() {
        let (repo, store) = repository();
        store
            .insert("faqs", json!({"question": "Q", "answer": "A"}))
            .await
            .unwrap();

        let faqs = repo.list_faqs().await.unwrap();
        assert_eq!(faqs[0].category, "General");
    }
}
