use std::path::PathBuf;

/// A downloaded file together with the ratio it is going to be sped up by
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
  pub url: String,
  pub path: PathBuf,
  pub ratio: f64,
}
