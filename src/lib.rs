//! Core library surface for the Personal Library Manager TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces. Keeping the glue logic documented makes it easy to recall why each
//! re-export exists when revisiting the project.
pub mod models;
pub mod store;
pub mod ui;

/// Convenience re-exports for the persistence layer. These are typically used
/// by `main.rs` to open the backing file and preload data.
pub use store::{Library, LibraryStats, SearchField};

/// The domain type that other layers manipulate.
pub use models::Book;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
