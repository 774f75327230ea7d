use std::path::PathBuf;

use crate::structures::Track;

/// Outcome of a single run
#[derive(Debug, Default)]
pub struct RunReport {
  /// Downloaded files with their ratios, in url list order
  pub tracks: Vec<Track>,
  /// Files that arrived in the destination directory
  pub moved: Vec<PathBuf>,
  /// Transformed files that are still in storage because moving them failed
  pub not_moved: Vec<PathBuf>,
  /// Requested urls that never produced a file
  pub leftover: Vec<String>,
}
