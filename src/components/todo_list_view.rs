//! Todo List View Component
//!
//! Displays the items in insertion order with their controls.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// The list itself plus the item-count footer
#[component]
pub fn TodoListView(
    editing_item: ReadSignal<Option<u32>>,
    set_editing_item: WriteSignal<Option<u32>>,
) -> impl IntoView {
    let store = use_app_store();

    let numbered_items = move || store.items().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="todo-list">
            <For
                each=numbered_items
                key=|(index, item)| {
                    // Key on every mutable field so edits and status changes
                    // re-render the row
                    (*index, item.id, item.text.clone(), item.status)
                }
                children=move |(index, item)| {
                    view! {
                        <TodoRow
                            item=item
                            number=index + 1
                            editing_item=editing_item
                            set_editing_item=set_editing_item
                        />
                    }
                }
            />

            <p class="item-count">
                {move || format!("{} items", store.items().get().len())}
            </p>
        </div>
    }
}
