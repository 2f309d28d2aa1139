//! New Todo Form Component
//!
//! Add-row for creating new items.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_item, use_app_store};

/// Form for appending a new item to the list
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (draft, set_draft) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        // Empty input is rejected and keeps the field as-is
        if store_add_item(&store, &text).is_some() {
            set_draft.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_item>
            <div class="new-todo-row">
                <input
                    type="text"
                    placeholder="Add item..."
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_draft.set(input.value());
                    }
                />
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}
