//! Theme Toggle Component

use leptos::prelude::*;

use crate::models::Theme;
use crate::store::{store_toggle_theme, use_app_store, AppStateStoreFields};

/// Button flipping the light/dark theme
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    let toggle_class = move || match store.theme().get() {
        Theme::Dark => "theme-toggle dark",
        Theme::Light => "theme-toggle",
    };

    view! {
        <button class=toggle_class on:click=move |_| { store_toggle_theme(&store); }>
            "Toggle Theme"
        </button>
    }
}
