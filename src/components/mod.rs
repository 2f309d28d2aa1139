//! UI Components
//!
//! Reusable Leptos components.

mod name_gate;
mod new_todo_form;
mod status_menu;
mod theme_toggle;
mod todo_editor;
mod todo_list_view;
mod todo_row;

pub use name_gate::NameGate;
pub use new_todo_form::NewTodoForm;
pub use status_menu::StatusMenu;
pub use theme_toggle::ThemeToggle;
pub use todo_editor::TodoEditor;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
