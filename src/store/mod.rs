//! Persistence module split across logical submodules.

mod codec;
mod file;
mod library;

pub use codec::{RecordError, LIBRARY_HEADER};
pub use file::default_library_path;
pub use library::{Library, LibraryStats, SearchField};
