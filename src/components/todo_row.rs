//! Todo Row Component
//!
//! A single item row in the list.

use leptos::prelude::*;

use crate::components::StatusMenu;
use crate::models::TodoItem;
use crate::store::{store_delete_item, store_set_status, use_app_store};

/// One list row: number, text, status label, and the row controls
#[component]
pub fn TodoRow(
    item: TodoItem,
    number: usize,
    editing_item: ReadSignal<Option<u32>>,
    set_editing_item: WriteSignal<Option<u32>>,
) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let status = item.status;
    let text = item.text.clone();

    let row_class = move || {
        if editing_item.get() == Some(id) {
            "todo-row editing"
        } else {
            "todo-row"
        }
    };

    let delete = move |_| {
        // Close the editor if it points at the row being removed
        if editing_item.get() == Some(id) {
            set_editing_item.set(None);
        }
        store_delete_item(&store, id);
    };

    view! {
        <div class=row_class>
            <span class="todo-text">
                <strong>{format!("{}. {}", number, text)}</strong>
                " - "
                <em>{status.label()}</em>
            </span>

            <span class="todo-actions">
                <StatusMenu
                    current=status
                    on_select=move |new_status| store_set_status(&store, id, new_status)
                />
                <button class="delete-btn" on:click=delete>"Delete"</button>
                <button class="edit-btn" on:click=move |_| set_editing_item.set(Some(id))>
                    "Edit"
                </button>
            </span>
        </div>
    }
}
