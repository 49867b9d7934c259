use crate::models::Book;
use crate::store::SearchField;

/// Active search filter applied to the shelf. Unlike the store's one-shot
/// search, the shelf keeps the filter around so the list narrows live while
/// the user types.
#[derive(Clone)]
pub(crate) struct BookFilter {
    pub(crate) field: SearchField,
    pub(crate) query: String,
}

/// Wrapper around the full book list shown on the shelf screen.
pub(crate) struct ShelfScreen {
    pub(crate) books: Vec<Book>,
    pub(crate) filtered_books: Vec<Book>,
    pub(crate) filter: Option<BookFilter>,
    pub(crate) selected: usize,
}

impl ShelfScreen {
    pub(crate) fn new(books: Vec<Book>) -> Self {
        let mut screen = Self {
            filtered_books: Vec::new(),
            books,
            filter: None,
            selected: 0,
        };
        screen.apply_filter();
        screen
    }

    /// Narrow the visible list to records whose searched field contains the
    /// query as a case-insensitive substring. This mirrors the store's search
    /// semantics so the live filter and a committed search agree.
    pub(crate) fn apply_filter(&mut self) {
        self.filtered_books = match &self.filter {
            Some(filter) if !filter.query.trim().is_empty() => {
                let needle = filter.query.to_lowercase();
                self.books
                    .iter()
                    .filter(|book| {
                        let haystack = match filter.field {
                            SearchField::Title => &book.title,
                            SearchField::Author => &book.author,
                        };
                        haystack.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect()
            }
            _ => self.books.clone(),
        };

        if self.filtered_books.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.filtered_books.len() {
            self.selected = self.filtered_books.len() - 1;
        }
    }

    pub(crate) fn set_filter(&mut self, filter: Option<BookFilter>) {
        self.filter = filter;
        self.apply_filter();
    }

    pub(crate) fn has_filter(&self) -> bool {
        self.filter
            .as_ref()
            .map(|filter| !filter.query.trim().is_empty())
            .unwrap_or(false)
    }

    pub(crate) fn current_book(&self) -> Option<&Book> {
        self.filtered_books.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.filtered_books.is_empty() {
            return;
        }
        let len = self.filtered_books.len() as isize;
        let mut new = self.selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        if !self.filtered_books.is_empty() {
            self.selected = 0;
        }
    }

    pub(crate) fn select_last(&mut self) {
        if !self.filtered_books.is_empty() {
            self.selected = self.filtered_books.len() - 1;
        }
    }

    /// Replace the backing list after a mutation, keeping the active filter.
    pub(crate) fn set_books(&mut self, books: Vec<Book>) {
        self.books = books;
        self.apply_filter();
    }
}
