// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::EMPTY_TITLE_PLACEHOLDER;

/// A note as the backend stores it. Wire field names follow the backend
/// schema: the body is serialized as `note`, the timestamp as `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    #[serde(rename = "note")]
    pub body: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Title as the list view shows it, with a placeholder for empty titles.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            EMPTY_TITLE_PLACEHOLDER
        } else {
            &self.title
        }
    }
}

/// The two independently editable note fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteField {
    Title,
    Body,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str) -> Note {
        Note {
            id: 1,
            title: title.to_string(),
            body: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn given_non_empty_title_when_displaying_then_returns_title() {
        assert_eq!(note("Groceries").display_title(), "Groceries");
    }

    #[test]
    fn given_empty_title_when_displaying_then_returns_placeholder() {
        assert_eq!(note("").display_title(), "(Empty title)");
    }
}
