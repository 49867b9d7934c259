//! The library store itself: an ordered in-memory table of book records kept
//! in sync with the backing file. Every mutation rewrites the whole file
//! before returning, so the on-disk state is never older than one completed
//! operation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::codec;
use super::file::{default_library_path, ensure_parent_dir};
use crate::models::Book;

/// Which column a search inspects.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    /// Map a raw field label onto the enum. Anything other than the two known
    /// labels is unrecognized and yields `None`, which searches translate into
    /// an empty result set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Title" => Some(SearchField::Title),
            "Author" => Some(SearchField::Author),
            _ => None,
        }
    }

    /// Label shown in the search overlay and accepted by `from_label`.
    pub fn label(self) -> &'static str {
        match self {
            SearchField::Title => "Title",
            SearchField::Author => "Author",
        }
    }

    /// The other searchable field. The search overlay flips between the two
    /// with Tab.
    pub fn toggled(self) -> Self {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Author => SearchField::Title,
        }
    }
}

/// Aggregate numbers for the statistics screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LibraryStats {
    /// Number of records in the library.
    pub total: usize,
    /// Share of records marked read, in percent. Zero for an empty library so
    /// the computation never divides by zero.
    pub percent_read: f64,
}

/// The ordered collection of all book records plus the backing file they are
/// persisted to. Insertion order is preserved; no uniqueness is enforced, so
/// duplicate titles accumulate until a removal sweeps them all out.
#[derive(Debug)]
pub struct Library {
    path: PathBuf,
    books: Vec<Book>,
}

impl Library {
    /// Open the library at its default home-directory location, creating the
    /// data directory on first use. The backing file itself is only written by
    /// the first mutation.
    pub fn open_default() -> Result<Self> {
        let path = default_library_path()?;
        ensure_parent_dir(&path)?;
        Self::load(path)
    }

    /// Load the library from an arbitrary path. A missing file is not an
    /// error: it yields an empty library with the same schema. A file that
    /// exists but does not parse fails with the underlying
    /// [`RecordError`](super::RecordError) in the chain.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                books: Vec::new(),
            });
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read library file {}", path.display()))?;
        let books = codec::decode_library(&content)
            .with_context(|| format!("failed to parse library file {}", path.display()))?;

        Ok(Self { path, books })
    }

    /// Serialize the entire table back to the backing file, fixed column
    /// order, overwriting prior contents. The write is not atomic; a crash
    /// mid-write can leave a truncated file.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, codec::encode_library(&self.books))
            .with_context(|| format!("failed to write library file {}", self.path.display()))
    }

    /// Append a new record to the end of the sequence and persist. No
    /// validation happens here; the caller owns presence and range checks.
    /// The hydrated record is echoed back so callers can update UI state
    /// without re-reading the file.
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        year: i64,
        genre: &str,
        read: bool,
    ) -> Result<Book> {
        let book = Book {
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
            read,
        };
        self.books.push(book.clone());
        self.save()?;
        Ok(book)
    }

    /// Remove every record whose title equals the argument exactly
    /// (case-sensitive) and persist. The file is rewritten even when nothing
    /// matched. Returns how many records were removed.
    pub fn remove_book(&mut self, title: &str) -> Result<usize> {
        let before = self.books.len();
        self.books.retain(|book| book.title != title);
        let removed = before - self.books.len();
        self.save()?;
        Ok(removed)
    }

    /// Search by a raw field label. Unrecognized labels produce an empty
    /// result set rather than an error.
    pub fn search_books(&self, term: &str, field: &str) -> Vec<Book> {
        match SearchField::from_label(field) {
            Some(field) => self.search_by(term, field),
            None => Vec::new(),
        }
    }

    /// Return the records whose value in the chosen field contains the term
    /// as a case-insensitive substring. No side effects.
    pub fn search_by(&self, term: &str, field: SearchField) -> Vec<Book> {
        let needle = term.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                let haystack = match field {
                    SearchField::Title => &book.title,
                    SearchField::Author => &book.author,
                };
                haystack.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Total count and percent read. An empty library reports `(0, 0.0)`.
    pub fn statistics(&self) -> LibraryStats {
        let total = self.books.len();
        if total == 0 {
            return LibraryStats {
                total: 0,
                percent_read: 0.0,
            };
        }
        let read = self.books.iter().filter(|book| book.read).count();
        LibraryStats {
            total,
            percent_read: read as f64 * 100.0 / total as f64,
        }
    }

    /// The records in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of records, exposed for readability.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn scratch_library() -> (TempDir, Library) {
        let dir = tempdir().expect("create temp dir");
        let library = Library::load(dir.path().join("library.txt")).expect("load empty library");
        (dir, library)
    }

    #[test]
    fn empty_library_reports_zero_statistics() {
        let (_dir, library) = scratch_library();
        let stats = library.statistics();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percent_read, 0.0);
    }

    #[test]
    fn statistics_follow_adds_and_removes() {
        let (_dir, mut library) = scratch_library();

        library
            .add_book("Dune", "Frank Herbert", 1965, "Sci-Fi", true)
            .expect("add Dune");
        let stats = library.statistics();
        assert_eq!((stats.total, stats.percent_read), (1, 100.0));

        library
            .add_book("1984", "George Orwell", 1949, "Dystopian", false)
            .expect("add 1984");
        let stats = library.statistics();
        assert_eq!((stats.total, stats.percent_read), (2, 50.0));

        assert_eq!(library.remove_book("Dune").expect("remove Dune"), 1);
        let stats = library.statistics();
        assert_eq!((stats.total, stats.percent_read), (1, 0.0));
    }

    #[test]
    fn search_is_case_insensitive_and_substring_based() {
        let (_dir, mut library) = scratch_library();
        library
            .add_book("The Hobbit", "J.R.R. Tolkien", 1937, "Fantasy", true)
            .expect("add book");

        let by_author = library.search_books("tolk", "Author");
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].author, "J.R.R. Tolkien");

        let by_title = library.search_books("HOBB", "Title");
        assert_eq!(by_title.len(), 1);

        assert!(library.search_books("tolk", "Title").is_empty());
    }

    #[test]
    fn unknown_search_field_yields_empty_results() {
        let (_dir, mut library) = scratch_library();
        library
            .add_book("Dune", "Frank Herbert", 1965, "Sci-Fi", true)
            .expect("add book");
        assert!(library.search_books("Dune", "Genre").is_empty());
        assert!(library.search_books("Dune", "title").is_empty());
    }

    #[test]
    fn remove_drops_every_exact_title_match() {
        let (_dir, mut library) = scratch_library();
        library
            .add_book("Dune", "Frank Herbert", 1965, "Sci-Fi", true)
            .expect("add first copy");
        library
            .add_book("Dune", "Frank Herbert", 1965, "Sci-Fi", false)
            .expect("add duplicate");
        library
            .add_book("dune", "Someone Else", 2000, "Sci-Fi", false)
            .expect("add different-case title");

        assert_eq!(library.remove_book("Dune").expect("remove"), 2);
        assert_eq!(library.len(), 1);
        assert!(library.search_books("Dune", "Title").len() == 1);
        assert_eq!(library.books()[0].title, "dune");
    }

    #[test]
    fn removed_titles_stop_matching_title_searches() {
        let (_dir, mut library) = scratch_library();
        library
            .add_book("Dune", "Frank Herbert", 1965, "Sci-Fi", true)
            .expect("add book");
        library.remove_book("Dune").expect("remove book");
        assert!(library.search_books("Dune", "Title").is_empty());
    }

    #[test]
    fn unmatched_remove_still_rewrites_the_file() {
        let (_dir, mut library) = scratch_library();
        library
            .add_book("Dune", "Frank Herbert", 1965, "Sci-Fi", true)
            .expect("add book");

        std::fs::remove_file(library.path()).expect("drop backing file");
        assert_eq!(library.remove_book("No Such Title").expect("remove"), 0);

        // The no-op rewrite recreated the file with the full table intact.
        let reloaded = Library::load(library.path().to_path_buf()).expect("reload");
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.books()[0].title, "Dune");
    }
}
