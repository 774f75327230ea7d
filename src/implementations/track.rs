use std::path::PathBuf;

use crate::functions::shortened_path;
use crate::structures::{DownloadedFile, Track};

impl Track {
  pub fn new(file: DownloadedFile, ratio: f64) -> Self {
    Self {
      url: file.url,
      path: file.path,
      ratio,
    }
  }

  /// Where the sped up version of this track is written to
  pub fn output_path(&self) -> PathBuf {
    shortened_path(&self.path)
  }
}
