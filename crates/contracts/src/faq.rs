use serde::{Deserialize, Serialize};

/// Category label applied when a stored document carries none.
pub const DEFAULT_CATEGORY: &str = "General";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

// ============================================================================
// Entity
// ============================================================================

/// One question/answer record as it exists in the remote store.
///
/// The `id` is opaque and assigned by the store on creation. There is no
/// uniqueness constraint on question text and no ordering field; display
/// order is whatever order the store enumerates documents in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default = "default_category")]
    pub category: String,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Submission payload for a new FAQ. Validated at the point of submission,
/// before any remote call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl Default for FaqDraft {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Partial update. Absent fields are left untouched server-side, so `None`
/// fields must not be serialized at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FaqPatch {
    pub fn is_empty(&self) -> bool {
        self.question.is_none() && self.answer.is_none() && self.category.is_none()
    }
}

impl FaqItem {
    /// Mirror of the store-side partial merge, used by the views to patch
    /// local state after a successful `update_faq`.
    pub fn apply(&mut self, patch: &FaqPatch) {
        if let Some(question) = &patch.question {
            self.question = question.clone();
        }
        if let Some(answer) = &patch.answer {
            self.answer = answer.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
    }
}
