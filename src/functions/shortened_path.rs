use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Inserted between stem and extension of every sped up file
pub const SHORT_SUFFIX: &str = "-short";

/// `dir/name.mp3` becomes `dir/name-short.mp3`
pub fn shortened_path(path: &Path) -> PathBuf {
  let mut name = OsString::from(path.file_stem().unwrap_or_default());
  name.push(SHORT_SUFFIX);
  if let Some(extension) = path.extension() {
    name.push(".");
    name.push(extension);
  }
  path.with_file_name(name)
}

/// Whether `path` looks like the output of `shortened_path`
pub fn is_shortened(path: &Path) -> bool {
  path.file_stem()
    .and_then(|stem| stem.to_str())
    .map_or(false, |stem| stem.ends_with(SHORT_SUFFIX))
}
