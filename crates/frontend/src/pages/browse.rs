use contracts::category::Category;
use contracts::faq::FaqItem;
use datastore::view_state::{filter_faqs, Accordion, CategoryFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::data::repository;
use crate::shared::alert;
use crate::shared::linkify::{linkify, Segment};

/// Public browse view: one fetch on mount, then purely local filtering.
#[component]
pub fn BrowsePage() -> impl IntoView {
    let (faqs, set_faqs) = signal(Vec::<FaqItem>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (search, set_search) = signal(String::new());
    let (active, set_active) = signal(CategoryFilter::All);
    let (accordion, set_accordion) = signal(Accordion::default());
    let (loading, set_loading) = signal(true);

    // Writes after the awaits use the try_* setters: if the view was
    // dismissed mid-fetch the result is discarded as a no-op.
    spawn_local(async move {
        let repo = repository();
        match repo.list_faqs().await {
            Ok(items) => {
                let _ = set_faqs.try_set(items);
            }
            Err(e) => {
                log::error!("failed to fetch FAQs: {e}");
                alert(&format!("Failed to load FAQs: {e}"));
            }
        }
        match repo.list_categories().await {
            Ok(items) => {
                let _ = set_categories.try_set(items);
            }
            Err(e) => {
                log::error!("failed to fetch categories: {e}");
                alert(&format!("Failed to load categories: {e}"));
            }
        }
        let _ = set_loading.try_set(false);
    });

    let visible = move || filter_faqs(&faqs.get(), &search.get(), &active.get());

    view! {
        <div class="browse">
            <div class="browse__hero">
                <h1 class="browse__title">"Frequently Asked Questions"</h1>
                <p class="browse__subtitle">
                    "Find answers to common questions. Explore our knowledge base."
                </p>
                <div class="browse__search">
                    <input
                        type="text"
                        placeholder="Search FAQs..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="browse__tabs">
                <button
                    class="tab"
                    class:tab--active=move || active.get() == CategoryFilter::All
                    on:click=move |_| set_active.set(CategoryFilter::All)
                >
                    "All"
                </button>
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|category| {
                            let name = category.name.clone();
                            let name_for_class = category.name.clone();
                            view! {
                                <button
                                    class="tab"
                                    class:tab--active=move || {
                                        active.get() == CategoryFilter::Only(name_for_class.clone())
                                    }
                                    on:click=move |_| {
                                        set_active.set(CategoryFilter::Only(name.clone()))
                                    }
                                >
                                    {category.name}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="browse__content">
                <Show
                    when=move || !visible().is_empty()
                    fallback=move || {
                        view! {
                            <div class="browse__empty">
                                <Show
                                    when=move || !loading.get()
                                    fallback=|| view! { <p>"Loading FAQs..."</p> }
                                >
                                    <h2>
                                        {move || {
                                            if search.get().is_empty() {
                                                "No FAQs available yet"
                                            } else {
                                                "No results found"
                                            }
                                        }}
                                    </h2>
                                    <p>
                                        {move || {
                                            if search.get().is_empty() {
                                                "Check back soon for frequently asked questions"
                                            } else {
                                                "Try adjusting your search terms to find what you're looking for"
                                            }
                                        }}
                                    </p>
                                </Show>
                            </div>
                        }
                    }
                >
                    <div class="browse__list">
                        {move || {
                            visible()
                                .into_iter()
                                .map(|faq| {
                                    let id_for_toggle = faq.id.clone();
                                    let id_for_open = faq.id.clone();
                                    let answer = faq.answer.clone();
                                    view! {
                                        <div class="faq-card">
                                            <button
                                                class="faq-card__question"
                                                on:click=move |_| {
                                                    set_accordion
                                                        .update(|accordion| accordion.toggle(&id_for_toggle))
                                                }
                                            >
                                                <h3>{faq.question}</h3>
                                                <span class="faq-card__category">{faq.category}</span>
                                            </button>
                                            <Show when=move || accordion.get().is_open(&id_for_open)>
                                                <div class="faq-card__answer">
                                                    {linkify(&answer)
                                                        .into_iter()
                                                        .map(|segment| match segment {
                                                            Segment::Text(text) => {
                                                                view! { <span>{text}</span> }.into_any()
                                                            }
                                                            Segment::Link(url) => {
                                                                view! {
                                                                    <a
                                                                        href=url.clone()
                                                                        target="_blank"
                                                                        rel="noopener noreferrer"
                                                                        class="faq-card__link"
                                                                    >
                                                                        {url.clone()}
                                                                    </a>
                                                                }
                                                                    .into_any()
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </div>
    }
}
