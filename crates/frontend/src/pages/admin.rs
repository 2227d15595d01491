use contracts::category::Category;
use contracts::faq::{FaqDraft, FaqItem, FaqPatch};
use datastore::view_state::{self, DeleteConfirm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::data::repository;
use crate::shared::alert;
use crate::system::auth::context::{logout, use_session};

/// Admin management view. Keeps its own copies of the fetched collections and
/// patches them directly after each successful write — no refetch, so this
/// view and an open browse view can diverge until one of them reloads.
#[component]
pub fn AdminPage() -> impl IntoView {
    let (faqs, set_faqs) = signal(Vec::<FaqItem>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (loading, set_loading) = signal(true);

    let (show_form, set_show_form) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<String>::None);
    let form = RwSignal::new(FaqDraft::default());

    let (faq_confirm, set_faq_confirm) = signal(DeleteConfirm::default());
    let (category_confirm, set_category_confirm) = signal(DeleteConfirm::default());
    let (new_category, set_new_category) = signal(String::new());

    let (_, set_session) = use_session();
    let navigate = use_navigate();

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

    let reset_form = move || {
        let _ = form.try_set(FaqDraft::default());
        let _ = set_editing_id.try_set(None);
        let _ = set_show_form.try_set(false);
    };

    let handle_save = move |_| {
        let draft = form.get();
        if draft.question.trim().is_empty() || draft.answer.trim().is_empty() {
            alert("Please fill in both question and answer");
            return;
        }

        match editing_id.get() {
            Some(id) => {
                let patch = FaqPatch {
                    question: Some(draft.question),
                    answer: Some(draft.answer),
                    category: Some(draft.category),
                };
                spawn_local(async move {
                    match repository().update_faq(&id, &patch).await {
                        Ok(()) => {
                            let _ = set_faqs
                                .try_update(|faqs| view_state::patch_local(faqs, &id, &patch));
                            reset_form();
                        }
                        Err(e) => alert(&format!("Failed to save FAQ: {e}")),
                    }
                });
            }
            None => {
                spawn_local(async move {
                    match repository().add_faq(draft).await {
                        Ok(created) => {
                            let _ = set_faqs.try_update(|faqs| faqs.push(created));
                            reset_form();
                        }
                        Err(e) => alert(&format!("Failed to save FAQ: {e}")),
                    }
                });
            }
        }
    };

    let handle_edit = move |faq: FaqItem| {
        form.set(FaqDraft {
            question: faq.question,
            answer: faq.answer,
            category: faq.category,
        });
        set_editing_id.set(Some(faq.id));
        set_show_form.set(true);
    };

    // First click arms the confirmation, the second click on the same id
    // actually deletes.
    let handle_delete_faq = move |id: String| {
        let mut confirmed = false;
        set_faq_confirm.update(|confirm| confirmed = confirm.request(&id));
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match repository().delete_faq(&id).await {
                Ok(()) => {
                    let _ = set_faqs.try_update(|faqs| view_state::remove_local(faqs, &id));
                }
                Err(e) => alert(&format!("Failed to delete FAQ: {e}")),
            }
        });
    };

    let handle_add_category = move |_| {
        let name = new_category.get();
        spawn_local(async move {
            match repository().add_category(&name).await {
                Ok(created) => {
                    let _ = set_categories.try_update(|categories| {
                        categories.push(created);
                        categories.sort_by(|a, b| a.name.cmp(&b.name));
                    });
                    let _ = set_new_category.try_set(String::new());
                }
                Err(e) => alert(&format!("Failed to add category: {e}")),
            }
        });
    };

    let handle_delete_category = move |id: String| {
        let mut confirmed = false;
        set_category_confirm.update(|confirm| confirmed = confirm.request(&id));
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match repository().delete_category(&id).await {
                Ok(()) => {
                    let _ = set_categories
                        .try_update(|categories| categories.retain(|category| category.id != id));
                }
                Err(e) => alert(&format!("Failed to delete category: {e}")),
            }
        });
    };

    let handle_logout = move |_| {
        logout(set_session);
        navigate("/login", Default::default());
    };

    view! {
        <div class="admin">
            <div class="admin__header">
                <div>
                    <h1 class="admin__title">"FAQ Management"</h1>
                    <p class="admin__subtitle">
                        "Create, edit, and manage your frequently asked questions"
                    </p>
                </div>
                <button class="button button--secondary" on:click=handle_logout>
                    "Logout"
                </button>
            </div>

            <Show
                when=move || show_form.get()
                fallback=move || {
                    view! {
                        <button
                            class="button button--primary admin__add"
                            on:click=move |_| set_show_form.set(true)
                        >
                            "Add New FAQ"
                        </button>
                    }
                }
            >
                <div class="admin__form">
                    <div class="admin__form-header">
                        <h2>
                            {move || {
                                if editing_id.get().is_some() { "Edit FAQ" } else { "Add New FAQ" }
                            }}
                        </h2>
                        <button class="button button--secondary" on:click=move |_| reset_form()>
                            "Cancel"
                        </button>
                    </div>

                    <div class="form-group">
                        <label for="faq-question">"Question"</label>
                        <input
                            type="text"
                            id="faq-question"
                            placeholder="Enter the FAQ question"
                            prop:value=move || form.get().question
                            on:input=move |ev| {
                                form.update(|draft| draft.question = event_target_value(&ev))
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="faq-answer">"Answer"</label>
                        <textarea
                            id="faq-answer"
                            placeholder="Enter the FAQ answer"
                            rows="7"
                            prop:value=move || form.get().answer
                            on:input=move |ev| {
                                form.update(|draft| draft.answer = event_target_value(&ev))
                            }
                        ></textarea>
                    </div>

                    <div class="form-group">
                        <label for="faq-category">"Category"</label>
                        <select
                            id="faq-category"
                            prop:value=move || form.get().category
                            on:change=move |ev| {
                                form.update(|draft| draft.category = event_target_value(&ev))
                            }
                        >
                            {move || {
                                categories
                                    .get()
                                    .into_iter()
                                    .map(|category| {
                                        let value = category.name.clone();
                                        view! { <option value=value>{category.name}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <button class="button button--primary" on:click=handle_save>
                        {move || {
                            if editing_id.get().is_some() { "Update FAQ" } else { "Add FAQ" }
                        }}
                    </button>
                </div>
            </Show>

            <div class="admin__section">
                <h2>"Manage Categories"</h2>
                <div class="admin__category-add">
                    <input
                        type="text"
                        placeholder="New category name"
                        prop:value=move || new_category.get()
                        on:input=move |ev| set_new_category.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" on:click=handle_add_category>
                        "Add Category"
                    </button>
                </div>
                <div class="admin__category-list">
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|category| {
                                let id_for_delete = category.id.clone();
                                let id_for_title = category.id.clone();
                                let id_for_class = category.id.clone();
                                view! {
                                    <div class="category-chip">
                                        <span>{category.name}</span>
                                        <button
                                            class="category-chip__delete"
                                            class:category-chip__delete--armed=move || {
                                                category_confirm.get().is_pending(&id_for_class)
                                            }
                                            title=move || {
                                                if category_confirm.get().is_pending(&id_for_title) {
                                                    "Click again to confirm deletion"
                                                } else {
                                                    "Delete"
                                                }
                                            }
                                            on:click=move |_| {
                                                handle_delete_category(id_for_delete.clone())
                                            }
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="admin__section">
                <h2>"Manage FAQs"</h2>
                <p class="admin__count">"Total: " {move || faqs.get().len()}</p>

                <Show
                    when=move || !faqs.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="admin__empty">
                                <Show
                                    when=move || !loading.get()
                                    fallback=|| view! { <p>"Loading FAQs..."</p> }
                                >
                                    <p>"No FAQs yet. Create your first one!"</p>
                                    <p class="admin__empty-hint">
                                        "Click the \"Add New FAQ\" button above to get started."
                                    </p>
                                </Show>
                            </div>
                        }
                    }
                >
                    <div class="admin__list">
                        {move || {
                            faqs.get()
                                .into_iter()
                                .map(|faq| {
                                    let faq_for_edit = faq.clone();
                                    let id_for_delete = faq.id.clone();
                                    let id_for_title = faq.id.clone();
                                    let id_for_class = faq.id.clone();
                                    view! {
                                        <div class="admin-card">
                                            <div class="admin-card__body">
                                                <h3 class="admin-card__question">{faq.question}</h3>
                                                <p class="admin-card__answer">{faq.answer}</p>
                                                <span class="admin-card__category">{faq.category}</span>
                                            </div>
                                            <div class="admin-card__actions">
                                                <button
                                                    class="button button--secondary"
                                                    title="Edit"
                                                    on:click=move |_| handle_edit(faq_for_edit.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="button button--danger"
                                                    class:button--armed=move || {
                                                        faq_confirm.get().is_pending(&id_for_class)
                                                    }
                                                    title=move || {
                                                        if faq_confirm.get().is_pending(&id_for_title) {
                                                            "Click again to confirm deletion"
                                                        } else {
                                                            "Delete"
                                                        }
                                                    }
                                                    on:click=move |_| handle_delete_faq(id_for_delete.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
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
