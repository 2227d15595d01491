use contracts::faq::{FaqItem, DEFAULT_CATEGORY};

/// Active category tab on the browse and admin views.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

/// A FAQ is visible iff the search text is empty or appears case-insensitively
/// in its question or answer, and the active tab is All or matches its
/// category (absent category counts as "General").
pub fn faq_matches(faq: &FaqItem, search: &str, filter: &CategoryFilter) -> bool {
    let search = search.to_lowercase();
    let text_hit = search.is_empty()
        || faq.question.to_lowercase().contains(&search)
        || faq.answer.to_lowercase().contains(&search);

    let category = if faq.category.trim().is_empty() {
        DEFAULT_CATEGORY
    } else {
        faq.category.as_str()
    };
    let category_hit = match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(name) => category == name,
    };

    text_hit && category_hit
}

pub fn filter_faqs(faqs: &[FaqItem], search: &str, filter: &CategoryFilter) -> Vec<FaqItem> {
    faqs.iter()
        .filter(|faq| faq_matches(faq, search, filter))
        .cloned()
        .collect()
}

/// Two-click delete confirmation, keyed by entity id.
///
/// The first click arms the flag; a second click on the same id confirms; a
/// click on a different id's delete control silently re-arms onto that id.
/// There is no timeout-based disarm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirm {
    pending: Option<String>,
}

impl DeleteConfirm {
    /// Register a delete click. Returns `true` when the delete is confirmed
    /// and should execute.
    pub fn request(&mut self, id: &str) -> bool {
        if self.pending.as_deref() == Some(id) {
            self.pending = None;
            true
        } else {
            self.pending = Some(id.to_string());
            false
        }
    }

    pub fn disarm(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.as_deref() == Some(id)
    }
}

/// One-open-at-a-time accordion over FAQ ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<String>,
}

impl Accordion {
    pub fn toggle(&mut self, id: &str) {
        if self.open.as_deref() == Some(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_string());
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }
}

/// Patch the local copy of a collection after a successful `update_faq`,
/// instead of refetching.
pub fn patch_local(faqs: &mut [FaqItem], id: &str, patch: &contracts::faq::FaqPatch) {
    if let Some(faq) = faqs.iter_mut().find(|faq| faq.id == id) {
        faq.apply(patch);
    }
}

/// Drop the local copy of a deleted FAQ.
pub fn remove_local(faqs: &mut Vec<FaqItem>, id: &str) {
    faqs.retain(|faq| faq.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::faq::FaqPatch;

    fn faq(id: &str, question: &str, answer: &str, category: &str) -> FaqItem {
        FaqItem {
            id: id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
        }
    }

    fn sample() -> Vec<FaqItem> {
        vec![
            faq("1", "How do I pay an invoice?", "Use the payments page.", "Payments"),
            faq("2", "Where is my receipt?", "Receipts are emailed.", "Billing"),
            faq("3", "What is FAQ Hub?", "A tool for browsing FAQs.", ""),
        ]
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let visible = filter_faqs(&sample(), "", &CategoryFilter::All);
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_over_question_and_answer() {
        let faqs = sample();

        let by_question = filter_faqs(&faqs, "INVOICE", &CategoryFilter::All);
        assert_eq!(by_question.len(), 1);
        assert_eq!(by_question[0].id, "1");

        let by_answer = filter_faqs(&faqs, "emailed", &CategoryFilter::All);
        assert_eq!(by_answer.len(), 1);
        assert_eq!(by_answer[0].id, "2");

        assert!(filter_faqs(&faqs, "refund", &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_category_tab_intersects_with_search() {
        let faqs = sample();

        let billing = CategoryFilter::Only("Billing".to_string());
        assert_eq!(filter_faqs(&faqs, "", &billing).len(), 1);
        assert!(filter_faqs(&faqs, "invoice", &billing).is_empty());
        assert_eq!(filter_faqs(&faqs, "receipt", &billing).len(), 1);
    }

    #[test]
    fn test_blank_category_counts_as_general() {
        let general = CategoryFilter::Only("General".to_string());
        let visible = filter_faqs(&sample(), "", &general);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "3");
    }

    #[test]
    fn test_single_click_arms_but_never_deletes() {
        let mut confirm = DeleteConfirm::default();
        assert!(!confirm.request("1"));
        assert!(confirm.is_pending("1"));
    }

    #[test]
    fn test_second_click_on_same_id_confirms() {
        let mut confirm = DeleteConfirm::default();
        assert!(!confirm.request("1"));
        assert!(confirm.request("1"));
        assert!(!confirm.is_pending("1"));
    }

    #[test]
    fn test_click_on_different_id_rearms_without_confirming() {
        let mut confirm = DeleteConfirm::default();
        assert!(!confirm.request("1"));
        assert!(!confirm.request("2"));
        assert!(!confirm.is_pending("1"));
        assert!(confirm.is_pending("2"));
        // Only the follow-up click on the new id confirms.
        assert!(confirm.request("2"));
    }

    #[test]
    fn test_accordion_keeps_at_most_one_open() {
        let mut accordion = Accordion::default();
        accordion.toggle("1");
        assert!(accordion.is_open("1"));

        accordion.toggle("2");
        assert!(accordion.is_open("2"));
        assert!(!accordion.is_open("1"));

        accordion.toggle("2");
        assert!(!accordion.is_open("2"));
    }

    #[test]
    fn test_patch_local_replaces_only_the_target() {
        let mut faqs = sample();
        patch_local(
            &mut faqs,
            "2",
            &FaqPatch {
                answer: Some("Receipts are in your inbox.".into()),
                ..Default::default()
            },
        );

        assert_eq!(faqs[1].answer, "Receipts are in your inbox.");
        assert_eq!(faqs[1].question, "Where is my receipt?");
        assert_eq!(faqs[0].answer, "Use the payments page.");
    }

    #[test]
    fn test_remove_local_drops_by_id() {
        let mut faqs = sample();
        remove_local(&mut faqs, "2");
        assert_eq!(faqs.len(), 2);
        assert!(faqs.iter().all(|faq| faq.id != "2"));
    }
}
