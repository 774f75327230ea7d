use crate::structures::{DownloadedFile, RatioTable, Track};

/// Pairs every downloaded file with the ratio its url resolves to.
pub fn resolve_ratios(downloaded: Vec<DownloadedFile>, ratios: &RatioTable) -> Vec<Track> {
  downloaded.into_iter()
    .map(|file| {
      let ratio = ratios.resolve(&file.url);
      Track::new(file, ratio)
    })
    .collect()
}
