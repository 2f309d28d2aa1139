//! Frontend Models
//!
//! Data structures for the to-do list.

use serde::{Deserialize, Serialize};

/// One to-do entry. Identity is the `id`, not the list position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    pub text: String,
    pub status: Status,
}

impl TodoItem {
    /// New items start out as `Done`.
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            status: Status::Done,
        }
    }
}

/// Task status. Closed set; handlers match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Done,
    InProgress,
}

impl Status {
    /// All selectable statuses, in menu order.
    pub const ALL: [Status; 2] = [Status::Done, Status::InProgress];

    pub fn label(self) -> &'static str {
        match self {
            Status::Done => "Done",
            Status::InProgress => "In Progress",
        }
    }
}

/// Document theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value mirrored onto the document's `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
