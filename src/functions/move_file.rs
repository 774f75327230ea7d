use std::path::Path;

use tracing::debug;

use crate::structures::Error;

/// Renames `from` to `to`, copying and removing when a rename is not possible (e.g. across devices).
pub(crate) async fn move_file(from: &Path, to: &Path) -> Result<(), Error> {
  if let Err(e) = tokio::fs::rename(from, to).await {
    debug!("Renaming {} failed ({}), copying instead", from.display(), e);
    tokio::fs::copy(from, to).await?;
    tokio::fs::remove_file(from).await?;
  }
  Ok(())
}
