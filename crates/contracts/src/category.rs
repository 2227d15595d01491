use serde::{Deserialize, Serialize};

/// Names seeded into an empty category collection on first read.
pub const DEFAULT_CATEGORIES: [&str; 5] =
    ["General", "Billing", "Payments", "Account", "Technical"];

/// One named grouping label for FAQs.
///
/// Categories are independent of FAQs: a FAQ references a category by name,
/// by value, and deleting the category leaves the referencing FAQs untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Stored document for a category; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
}
