use std::path::{Path, PathBuf};

use tracing::{error, info, instrument};

use crate::functions::{is_shortened, list_files, move_file};
use crate::structures::Error;

/// Moves every `-short` file from `storage` into `destination`, one by one.
///
/// A failed move is logged and does not stop the others. Returns the moved files (at their new
/// location) and the files that stayed behind.
#[instrument]
pub async fn collect(storage: &Path, destination: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>), Error> {
  let files = list_files(storage, is_shortened).await?;
  let mut moved = Vec::with_capacity(files.len());
  let mut not_moved = Vec::new();
  for file in files {
    let name = match file.file_name() {
      Some(name) => name.to_owned(),
      None => continue,
    };
    info!("Moving {} to {}", name.to_string_lossy(), destination.display());
    let target = destination.join(&name);
    match move_file(&file, &target).await {
      Ok(()) => {
        info!("Done moving {}", name.to_string_lossy());
        moved.push(target);
      },
      Err(e) => {
        error!("Moving {} to {} failed, it stays in {}: {}", name.to_string_lossy(), destination.display(), storage.display(), e);
        not_moved.push(file);
      }
    }
  }
  Ok((moved, not_moved))
}
