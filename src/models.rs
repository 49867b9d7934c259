//! Domain models shared between the persistence layer and the TUI. The intent
//! is that these types stay light-weight data holders so other layers can
//! focus on presentation and persistence logic. Keeping the commentary here
//! means later refactors can reconstruct the assumptions even if other context
//! is lost.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// In-memory representation of one book record. The struct mirrors one line of
/// the backing file's five-column schema.
pub struct Book {
    /// Title displayed in lists and search results. It doubles as the removal
    /// key: removing a title drops every record that matches it exactly, so
    /// duplicate titles are allowed to accumulate but disappear together.
    pub title: String,
    /// Author field used both for display and filtering.
    pub author: String,
    /// Publication year. Kept as an integer so any future ordering is numeric
    /// instead of lexicographic. The 1800-2100 range is a form-level check
    /// only; the store accepts whatever it is handed.
    pub year: i64,
    /// Free-text genre.
    pub genre: String,
    /// Whether the user has finished the book.
    pub read: bool,
}

impl Book {
    /// Compose a `Title - Author` string that gracefully omits the hyphen if
    /// the author is blank. List views and confirmation dialogs rely on this
    /// ready-to-use formatting.
    pub fn display_title(&self) -> String {
        if self.author.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.author)
        }
    }

    /// Label used wherever the read flag is shown as text.
    pub fn read_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }
}

impl fmt::Display for Book {
    /// Write the display title to any formatter. Display is implemented so the
    /// type plays nicely with Ratatui widgets that consume strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_title())
    }
}
