//! Local demo data. Not wired into the live data path — the application reads
//! exclusively from the remote store. Kept for seeding a browser profile by
//! hand while developing without the store.

use contracts::faq::FaqItem;
use once_cell::sync::Lazy;

const SAMPLES_KEY: &str = "faqs";

pub static SAMPLE_FAQS: Lazy<Vec<FaqItem>> = Lazy::new(|| {
    vec![
        FaqItem {
            id: "1".into(),
            question: "What is FAQ Hub?".into(),
            answer: "FAQ Hub is a platform for managing frequently asked questions. \
                     It provides a clean interface for users to browse answers and \
                     for administrators to manage content."
                .into(),
            category: "General".into(),
        },
        FaqItem {
            id: "2".into(),
            question: "How do I add a new FAQ?".into(),
            answer: "Navigate to the Admin panel, click 'Add New FAQ', fill in the \
                     question and answer fields, pick a category and click 'Add FAQ'."
                .into(),
            category: "General".into(),
        },
        FaqItem {
            id: "3".into(),
            question: "Can I edit existing FAQs?".into(),
            answer: "Yes! In the Admin panel, click the edit button next to any FAQ \
                     to modify the question, answer and category."
                .into(),
            category: "General".into(),
        },
        FaqItem {
            id: "4".into(),
            question: "How do I delete an FAQ?".into(),
            answer: "Click the delete button next to the FAQ you want to remove. \
                     You'll need to click it again to confirm the deletion as a \
                     safety measure."
                .into(),
            category: "Account".into(),
        },
        FaqItem {
            id: "5".into(),
            question: "Can users search for FAQs?".into(),
            answer: "Yes! The search bar on the main page searches through all \
                     questions and answers, updating in real time as you type."
                .into(),
            category: "Technical".into(),
        },
    ]
});

/// Write the samples to localStorage once, if nothing is there yet.
pub fn initialize_sample_faqs() {
    let storage = match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        Some(storage) => storage,
        None => return,
    };
    let existing = storage.get_item(SAMPLES_KEY).ok().flatten();
    if existing.is_none() {
        if let Ok(json) = serde_json::to_string(&*SAMPLE_FAQS) {
            let _ = storage.set_item(SAMPLES_KEY, &json);
        }
    }
}
