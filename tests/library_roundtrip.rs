//! End-to-end persistence checks: every scenario loads a fresh `Library` from
//! the same path to simulate a process restart between operations.

use personal_library_manager::store::RecordError;
use personal_library_manager::Library;
use tempfile::tempdir;

#[test]
fn added_books_survive_a_restart() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("library.txt");

    let mut library = Library::load(&path).expect("load empty library");
    library
        .add_book(
            "Hello, \"World\"",
            "Anony, Mouse",
            2001,
            "Essays",
            true,
        )
        .expect("add book with embedded delimiters");
    library
        .add_book("Dune", "Frank Herbert", 1965, "Sci-Fi", false)
        .expect("add plain book");

    let reloaded = Library::load(&path).expect("reload library");
    assert_eq!(reloaded.books(), library.books());
    assert_eq!(reloaded.books()[0].title, "Hello, \"World\"");
    assert_eq!(reloaded.books()[0].author, "Anony, Mouse");
}

#[test]
fn missing_backing_file_loads_as_empty_library() {
    let dir = tempdir().expect("create temp dir");
    let library = Library::load(dir.path().join("does-not-exist.txt")).expect("load");
    assert!(library.is_empty());
    assert_eq!(library.statistics().total, 0);
}

#[test]
fn removed_titles_stay_gone_after_a_restart() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("library.txt");

    let mut library = Library::load(&path).expect("load empty library");
    library
        .add_book("Dune", "Frank Herbert", 1965, "Sci-Fi", true)
        .expect("add book");
    library.remove_book("Dune").expect("remove book");

    let reloaded = Library::load(&path).expect("reload library");
    assert!(reloaded.search_books("Dune", "Title").is_empty());
    assert!(reloaded.is_empty());
}

#[test]
fn malformed_backing_file_is_rejected_with_a_typed_error() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("library.txt");
    std::fs::write(
        &path,
        "Title,Author,Year,Genre,Read Status\nDune,Frank Herbert,not-a-year,Sci-Fi,true\n",
    )
    .expect("write malformed file");

    let err = Library::load(&path).expect_err("malformed file must not load");
    let record_error = err
        .root_cause()
        .downcast_ref::<RecordError>()
        .expect("error chain ends in a RecordError");
    assert!(matches!(record_error, RecordError::Year { record: 1, .. }));
}
