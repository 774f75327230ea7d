use std::path::PathBuf;

/// A url whose body was written to storage in full
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedFile {
  pub url: String,
  pub path: PathBuf,
}
