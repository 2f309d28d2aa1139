//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutations go
//! through the pure reducer methods on [`AppState`], so the whole functional
//! core is testable without a DOM.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Status, Theme, TodoItem};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Name entered on the gate screen
    pub user_name: String,
    /// True once the user has confirmed a non-blank name; never reverts
    pub name_confirmed: bool,
    /// All to-do items, insertion order preserved
    pub items: Vec<TodoItem>,
    /// Current document theme
    pub theme: Theme,
    /// Next id to hand out; ids are unique for the session
    pub next_item_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_item_id: 1,
            ..Default::default()
        }
    }

    /// Store the pending name verbatim. Any string is accepted here; the
    /// check happens on confirm.
    pub fn set_user_name(&mut self, value: String) {
        self.user_name = value;
    }

    /// Leave the name gate if the trimmed name is non-empty. Blank names are
    /// a silent no-op.
    pub fn confirm_name(&mut self) -> bool {
        if self.user_name.trim().is_empty() {
            return false;
        }
        self.name_confirmed = true;
        true
    }

    /// Append a new item with a fresh id and status `Done`, returning its id.
    /// Empty input is rejected; whitespace-only input is accepted verbatim.
    pub fn add_item(&mut self, text: &str) -> Option<u32> {
        if text.is_empty() {
            return None;
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.items.push(TodoItem::new(id, text));
        Some(id)
    }

    /// Remove the item with the given id; no-op for unknown ids.
    pub fn delete_item(&mut self, id: u32) {
        self.items.retain(|item| item.id != id);
    }

    /// Replace an item's text. A blank replacement or an unknown id leaves
    /// the item unchanged.
    pub fn edit_item(&mut self, id: u32, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Set an item's status; no-op for unknown ids.
    pub fn set_status(&mut self, id: u32, status: Status) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.status = status;
        }
    }

    /// Flip the theme and return the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Set the pending user name in the store
pub fn store_set_user_name(store: &AppStore, value: String) {
    store.write().set_user_name(value);
}

/// Confirm the user name in the store
pub fn store_confirm_name(store: &AppStore) -> bool {
    store.write().confirm_name()
}

/// Add an item to the store
pub fn store_add_item(store: &AppStore, text: &str) -> Option<u32> {
    store.write().add_item(text)
}

/// Remove an item from the store by id
pub fn store_delete_item(store: &AppStore, id: u32) {
    store.write().delete_item(id);
}

/// Replace an item's text in the store by id
pub fn store_edit_item(store: &AppStore, id: u32, text: &str) -> bool {
    store.write().edit_item(id, text)
}

/// Set an item's status in the store by id
pub fn store_set_status(store: &AppStore, id: u32, status: Status) {
    store.write().set_status(id, status);
}

/// Flip the theme in the store
pub fn store_toggle_theme(store: &AppStore) -> Theme {
    store.write().toggle_theme()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state_with_items(texts: &[&str]) -> AppState {
        let mut state = AppState::new();
        for text in texts {
            state.add_item(text);
        }
        state
    }

    #[test]
    fn test_confirm_name_requires_non_blank() {
        let mut state = AppState::new();
        assert!(!state.confirm_name());
        assert!(!state.name_confirmed);

        state.set_user_name("   ".to_string());
        assert!(!state.confirm_name());
        assert!(!state.name_confirmed);

        state.set_user_name("  Ada  ".to_string());
        assert!(state.confirm_name());
        assert!(state.name_confirmed);
    }

    #[test]
    fn test_confirm_name_never_reverts() {
        let mut state = AppState::new();
        state.set_user_name("Ada".to_string());
        assert!(state.confirm_name());

        // Blanking the name afterwards must not close the gate
        state.set_user_name(String::new());
        assert!(!state.confirm_name());
        assert!(state.name_confirmed);
    }

    #[test]
    fn test_add_item_appends_with_done_status() {
        let mut state = AppState::new();
        let id = state.add_item("Write spec").unwrap();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, id);
        assert_eq!(state.items[0].text, "Write spec");
        assert_eq!(state.items[0].status, Status::Done);
    }

    #[test]
    fn test_add_item_rejects_empty_but_not_whitespace() {
        let mut state = AppState::new();
        assert_eq!(state.add_item(""), None);
        assert!(state.items.is_empty());

        // Whitespace-only text is stored verbatim
        assert!(state.add_item("   ").is_some());
        assert_eq!(state.items[0].text, "   ");
    }

    #[test]
    fn test_delete_item_by_id_keeps_order() {
        let mut state = make_state_with_items(&["a", "b", "c"]);
        let middle = state.items[1].id;
        state.delete_item(middle);

        let texts: Vec<&str> = state.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["a", "c"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut state = make_state_with_items(&["a", "b"]);
        state.delete_item(999);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_edit_item_overwrites_in_place() {
        let mut state = make_state_with_items(&["a", "b"]);
        let id = state.items[1].id;
        assert!(state.edit_item(id, "b, revised"));
        assert_eq!(state.items[1].text, "b, revised");
        assert_eq!(state.items[0].text, "a");
    }

    #[test]
    fn test_edit_item_rejects_blank_and_unknown() {
        let mut state = make_state_with_items(&["a"]);
        let id = state.items[0].id;
        assert!(!state.edit_item(id, "   "));
        assert_eq!(state.items[0].text, "a");
        assert!(!state.edit_item(999, "ghost"));
    }

    #[test]
    fn test_set_status_round_trip() {
        let mut state = make_state_with_items(&["a"]);
        let id = state.items[0].id;
        let original = state.items[0].status;

        state.set_status(id, Status::InProgress);
        assert_eq!(state.items[0].status, Status::InProgress);

        state.set_status(id, Status::Done);
        assert_eq!(state.items[0].status, original);
    }

    #[test]
    fn test_set_status_unknown_id_is_noop() {
        let mut state = make_state_with_items(&["a"]);
        state.set_status(999, Status::InProgress);
        assert_eq!(state.items[0].status, Status::Done);
    }

    #[test]
    fn test_ids_unique_across_add_delete_interleaving() {
        let mut state = AppState::new();
        let a = state.add_item("a").unwrap();
        let b = state.add_item("b").unwrap();
        state.delete_item(a);
        let c = state.add_item("c").unwrap();
        state.delete_item(b);
        let d = state.add_item("d").unwrap();

        let mut ids = vec![a, b, c, d];
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let mut state = AppState::new();
        let original = state.theme;
        assert_eq!(state.toggle_theme(), Theme::Dark);
        assert_eq!(state.toggle_theme(), original);
    }

    #[test]
    fn test_full_session_scenario() {
        let mut state = AppState::new();
        state.set_user_name("Ada".to_string());
        assert!(state.confirm_name());

        state.add_item("Write spec");
        state.add_item("Review spec");
        assert_eq!(state.items[0].text, "Write spec");
        assert_eq!(state.items[0].status, Status::Done);
        assert_eq!(state.items[1].text, "Review spec");
        assert_eq!(state.items[1].status, Status::Done);

        let first = state.items[0].id;
        state.delete_item(first);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].text, "Review spec");
        assert_eq!(state.items[0].status, Status::Done);
    }
}
