//! Todo Editor Column
//!
//! Side column for rewriting an item's text. Opened per item id; nothing
//! here blocks the UI.

use leptos::prelude::*;

use crate::store::{store_edit_item, use_app_store, AppStateStoreFields};

/// Editor column, shown while an edit target is set
#[component]
pub fn TodoEditor(
    editing_item: ReadSignal<Option<u32>>,
    set_editing_item: WriteSignal<Option<u32>>,
) -> impl IntoView {
    let store = use_app_store();

    let (draft, set_draft) = signal(String::new());

    // Reseed the draft with the item's current text whenever the target
    // changes; edits elsewhere in the list leave a draft in progress alone
    Effect::new(move |_| {
        let text = editing_item
            .get()
            .and_then(|id| store.items().get_untracked().into_iter().find(|i| i.id == id))
            .map(|item| item.text)
            .unwrap_or_default();
        set_draft.set(text);
    });

    // A blank draft leaves the item unchanged; either way the editor closes
    let save = move || {
        if let Some(id) = editing_item.get() {
            store_edit_item(&store, id, &draft.get());
        }
        set_editing_item.set(None);
    };

    view! {
        {move || match editing_item.get() {
            Some(id) => view! {
                <div class="todo-editor-column">
                    <div class="todo-editor-header">
                        <span class="todo-editor-title">{format!("Edit item #{}", id)}</span>
                        <button class="close-btn" on:click=move |_| set_editing_item.set(None)>
                            "×"
                        </button>
                    </div>

                    <form
                        class="todo-edit-form"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            save();
                        }
                    >
                        <input
                            type="text"
                            class="todo-edit-input"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Escape" {
                                    set_editing_item.set(None);
                                }
                            }
                        />
                        <div class="todo-edit-actions">
                            <button type="submit">"Save"</button>
                            <button
                                type="button"
                                class="cancel-btn"
                                on:click=move |_| set_editing_item.set(None)
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            }.into_any(),
            None => view! { <div></div> }.into_any(),
        }}
    }
}
