use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".personal-library-manager";
/// Backing file name stored inside the application data directory.
const LIBRARY_FILE_NAME: &str = "library.txt";

/// Resolve the absolute path to the backing file inside the user's home.
pub fn default_library_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs
        .home_dir()
        .join(DATA_DIR_NAME)
        .join(LIBRARY_FILE_NAME))
}

/// Create the directory that will hold the backing file. The file itself is
/// only created by the first save; a missing file loads as an empty library.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }
    Ok(())
}
