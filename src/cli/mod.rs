pub mod replace;
pub mod serve;
pub mod show;

use crate::config::default_data_dir;
use crate::models::STORE_NAMESPACE;
use crate::store::FileStore;
use crate::{Context, Result};
use std::path::PathBuf;

/// Open the file store rooted at `data_dir` (default: ~/.labboard)
pub fn open_file_store(data_dir: Option<PathBuf>) -> Result<FileStore> {
    let root = match data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    FileStore::new(&root, STORE_NAMESPACE)
        .with_context(|| format!("Failed to open store at {}", root.display()))
}
