use std::path::Path;

use tracing::{error, info, instrument};

use crate::structures::Error;

/// Makes sure `destination` is a writable directory before anything gets downloaded.
#[instrument]
pub async fn check_destination(destination: &Path) -> Result<(), Error> {
  match tokio::fs::metadata(destination).await {
    Ok(metadata) if metadata.is_dir() && !metadata.permissions().readonly() => {
      info!("Output directory ready");
      Ok(())
    },
    _ => {
      error!("Output directory {} not available. Please fix and try again", destination.display());
      Err(Error::DestinationUnavailable(destination.to_path_buf()))
    }
  }
}
