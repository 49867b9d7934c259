//! Binary entry point that glues the file-backed library store to the TUI.
//! Summarizing the bootstrapping pipeline here keeps the intent obvious when
//! revisiting the code: we load the backing file, hydrate the initial app
//! state, and drive the Ratatui event loop until the user exits.
use personal_library_manager::{run_app, App, Library};

/// Load the library, then launch the Ratatui event loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for example
/// a backing file with malformed records) to the terminal instead of crashing
/// silently.
fn main() -> anyhow::Result<()> {
    let library = Library::open_default()?;

    let mut app = App::new(library);
    run_app(&mut app)
}
