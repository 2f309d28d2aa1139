//! Name Gate Component
//!
//! First screen: asks for a name before showing the list.

use leptos::prelude::*;

use crate::store::{store_confirm_name, store_set_user_name, use_app_store, AppStateStoreFields};

/// Welcome screen with the name prompt. Confirming a blank name is a silent
/// no-op; once confirmed there is no way back to this screen.
#[component]
pub fn NameGate() -> impl IntoView {
    let store = use_app_store();

    let on_start = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_confirm_name(&store) {
            web_sys::console::log_1(
                &format!("[GATE] Confirmed name {:?}", store.user_name().get_untracked()).into(),
            );
        }
    };

    view! {
        <div class="name-gate">
            <h1>"Welcome to the To-Do App"</h1>
            <form class="name-form" on:submit=on_start>
                <input
                    type="text"
                    placeholder="Enter your name..."
                    prop:value=move || store.user_name().get()
                    on:input=move |ev| store_set_user_name(&store, event_target_value(&ev))
                />
                <button type="submit">"Start"</button>
            </form>
        </div>
    }
}
