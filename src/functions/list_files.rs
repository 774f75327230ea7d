use std::path::{Path, PathBuf};

use crate::structures::Error;

/// Regular files directly inside `directory` that pass `filter`, sorted by path
pub(crate) async fn list_files(directory: &Path, filter: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>, Error> {
  let mut entries = tokio::fs::read_dir(directory).await?;
  let mut files = Vec::new();
  while let Some(entry) = entries.next_entry().await? {
    let path = entry.path();
    if entry.file_type().await?.is_file() && filter(&path) {
      files.push(path);
    }
  }
  files.sort();
  Ok(files)
}
