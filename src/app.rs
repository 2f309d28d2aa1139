//! To-Do List App
//!
//! Main application component: name gate, then the list screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NameGate, NewTodoForm, ThemeToggle, TodoEditor, TodoListView};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // Which item the editor column is open for (None = closed)
    let (editing_item, set_editing_item) = signal::<Option<u32>>(None);

    // Mirror the theme onto the document root so the stylesheet can follow it
    Effect::new(move |_| {
        let theme = store.theme().get();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
        web_sys::console::log_1(&format!("[APP] Theme set to {}", theme.as_str()).into());
    });

    view! {
        <div class="app-layout">
            {move || if store.name_confirmed().get() {
                view! {
                    // Center: Main Content
                    <main class="main-content">
                        <header class="list-header">
                            <h1>
                                {move || format!("Hi {}, welcome to your To-Do List!", store.user_name().get())}
                            </h1>
                            <ThemeToggle />
                        </header>

                        <hr />

                        <NewTodoForm />

                        <TodoListView
                            editing_item=editing_item
                            set_editing_item=set_editing_item
                        />
                    </main>

                    // Right: Editor column, shown while an item is being edited
                    <TodoEditor
                        editing_item=editing_item
                        set_editing_item=set_editing_item
                    />
                }.into_any()
            } else {
                view! { <NameGate /> }.into_any()
            }}
        </div>
    }
}
