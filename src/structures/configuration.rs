use std::path::PathBuf;

use crate::structures::{RatioTable, ToolPolicy, Tools};

/// Everything a run needs, read once from `shorten.cfg`
#[derive(Debug, Clone)]
pub struct Configuration {
  /// Text file with one url per line
  pub url_file: PathBuf,
  /// Substring keys and the speed-up ratio of urls containing them
  pub ratios: RatioTable,
  /// Scratch directory for downloads and transformed files
  pub storage: PathBuf,
  /// Directory the transformed files end up in
  pub destination: PathBuf,
  pub tools: Tools,
  pub tool_policy: ToolPolicy,
  /// Amount of downloads that may be in flight at once, at least 1
  pub parallel_downloads: usize,
}
