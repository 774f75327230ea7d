use std::path::{Path, PathBuf};

use futures::StreamExt;
use tracing::{info, instrument, warn};

use crate::structures::{DownloadedFile, Error};
use crate::traits::Fetcher;

/// Downloads every url into `storage`, at most `parallel_downloads` at a time.
///
/// Failed urls are logged and left out. The result keeps the order of `urls`.
/// When two urls land on the same file name the earlier url keeps it and the later one fails.
#[instrument(skip(urls, fetcher))]
pub async fn download(urls: &[String], storage: &Path, fetcher: &dyn Fetcher, parallel_downloads: usize) -> Vec<DownloadedFile> {
  let results : Vec<(&String, Result<(PathBuf, PathBuf), Error>)> = futures::stream::iter(urls.iter().enumerate())
    .map(|(index, url)| async move { (url, download_file(index, url, storage, fetcher).await) })
    .buffered(parallel_downloads.max(1))
    .collect()
    .await;

  // names are claimed in url order, whatever order the downloads finished in
  let mut downloaded : Vec<DownloadedFile> = Vec::with_capacity(results.len());
  for (url, result) in results {
    let kept = match result {
      Ok((part_path, path)) => keep(url, &part_path, path, &downloaded).await,
      Err(e) => Err(e),
    };
    match kept {
      Ok(path) => {
        info!("Done saving {}", path.display());
        downloaded.push(DownloadedFile { url: url.clone(), path });
      },
      Err(e) => warn!("Could not download {}: {}", url, e),
    }
  }
  downloaded
}

/// Streams `url` into a hidden part file.
///
/// Returns the part file and the name it should be stored under.
#[instrument(skip(storage, fetcher))]
pub(crate) async fn download_file(index: usize, url: &str, storage: &Path, fetcher: &dyn Fetcher) -> Result<(PathBuf, PathBuf), Error> {
  let file_name = url_file_name(url)?;
  info!("Saving {}", file_name);
  let part_path = storage.join(format!(".{}-{}.part", index, file_name));

  let response = match fetcher.fetch(url, &part_path).await {
    Ok(response) => response,
    Err(e) => {
      remove_part(&part_path).await;
      return Err(e);
    }
  };
  if !response.is_success() {
    remove_part(&part_path).await;
    return Err(Error::InvalidStatus(url.to_string(), response.status));
  }

  // Only the last component of the header is trusted, the file always lands in storage
  let path = match response.filename().and_then(|name| Path::new(name).file_name()) {
    Some(name) => storage.join(name),
    None => {
      warn!("Couldn't get 'filename' from response header");
      info!("Using {} instead", file_name);
      storage.join(&file_name)
    }
  };
  Ok((part_path, path))
}

/// Renames the part file to `path` unless an earlier url of this run already owns that name
async fn keep(url: &str, part_path: &Path, path: PathBuf, downloaded: &[DownloadedFile]) -> Result<PathBuf, Error> {
  if downloaded.iter().any(|file| file.path == path) {
    remove_part(part_path).await;
    return Err(Error::DuplicateFileName(url.to_string(), path));
  }
  if let Err(e) = tokio::fs::rename(part_path, &path).await {
    remove_part(part_path).await;
    return Err(e.into());
  }
  Ok(path)
}

/// Last segment of the url path, query and fragment excluded
pub(crate) fn url_file_name(url: &str) -> Result<String, Error> {
  let parsed = url::Url::parse(url)?;
  parsed.path_segments()
    .and_then(|segments| segments.last())
    .filter(|segment| !segment.is_empty())
    .map(|segment| segment.to_string())
    .ok_or_else(|| Error::NoFilename(url.to_string()))
}

async fn remove_part(path: &Path) {
  match tokio::fs::remove_file(path).await {
    Ok(()) => {},
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {},
    Err(e) => warn!("Could not remove {}: {}", path.display(), e),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tests::fakes::FakeFetcher;

  fn urls(urls: &[&str]) -> Vec<String> {
    urls.iter().map(|url| url.to_string()).collect()
  }

  fn storage_contents(storage: &Path) -> Vec<String> {
    let mut names : Vec<String> = std::fs::read_dir(storage).unwrap()
      .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
      .collect();
    names.sort();
    names
  }

  #[test]
  fn file_name_comes_from_last_segment() {
    assert_eq!(url_file_name("https://example.org/feed/episode-3.mp3").unwrap(), "episode-3.mp3");
    assert_eq!(url_file_name("https://example.org/feed/episode-3.mp3?token=abc#t=10").unwrap(), "episode-3.mp3");
    assert!(matches!(url_file_name("https://example.org/feed/"), Err(Error::NoFilename(_))));
    assert!(matches!(url_file_name("not a url"), Err(Error::UrlError(_))));
  }

  #[tokio::test]
  async fn successful_download_lands_in_storage() {
    let storage = tempfile::tempdir().unwrap();
    let fetcher = FakeFetcher::new().respond("https://example.org/a.mp3", 200, b"first");
    let downloaded = download(&urls(&["https://example.org/a.mp3"]), storage.path(), &fetcher, 1).await;
    assert_eq!(downloaded, vec![DownloadedFile {
      url: "https://example.org/a.mp3".to_string(),
      path: storage.path().join("a.mp3"),
    }]);
    assert_eq!(std::fs::read(storage.path().join("a.mp3")).unwrap(), b"first");
    assert_eq!(storage_contents(storage.path()), vec!["a.mp3".to_string()]);
  }

  #[tokio::test]
  async fn failed_urls_leave_nothing_behind() {
    let storage = tempfile::tempdir().unwrap();
    let fetcher = FakeFetcher::new()
      .respond("https://example.org/missing.mp3", 404, b"not found");
    let requested = urls(&["https://example.org/missing.mp3", "https://unreachable.example.org/b.mp3", "https://example.org/dir/"]);
    let downloaded = download(&requested, storage.path(), &fetcher, 1).await;
    assert!(downloaded.is_empty());
    assert!(storage_contents(storage.path()).is_empty());
    // the url without a file name is never requested
    assert_eq!(fetcher.requests(), urls(&["https://example.org/missing.mp3", "https://unreachable.example.org/b.mp3"]));
  }

  #[tokio::test]
  async fn filename_header_is_preferred() {
    let storage = tempfile::tempdir().unwrap();
    let fetcher = FakeFetcher::new()
      .respond_with_filename("https://example.org/download?id=7", 200, "../../etc/Morning Show.mp3", b"show");
    let downloaded = download(&urls(&["https://example.org/download?id=7"]), storage.path(), &fetcher, 1).await;
    assert_eq!(downloaded.len(), 1);
    assert_eq!(downloaded[0].path, storage.path().join("Morning Show.mp3"));
    assert_eq!(storage_contents(storage.path()), vec!["Morning Show.mp3".to_string()]);
  }

  #[tokio::test]
  async fn empty_filename_header_falls_back_to_url() {
    let storage = tempfile::tempdir().unwrap();
    let fetcher = FakeFetcher::new()
      .respond_with_filename("https://example.org/a.mp3", 200, "  ", b"a");
    let downloaded = download(&urls(&["https://example.org/a.mp3"]), storage.path(), &fetcher, 1).await;
    assert_eq!(downloaded[0].path, storage.path().join("a.mp3"));
  }

  #[tokio::test]
  async fn same_file_name_is_kept_by_the_earlier_url() {
    let storage = tempfile::tempdir().unwrap();
    let fetcher = FakeFetcher::new()
      .respond("https://radio.example.org/ep.mp3", 200, b"RADIO")
      .respond("https://news.example.org/ep.mp3", 200, b"NEWS")
      .respond_with_filename("https://example.org/get?id=1", 200, "ep.mp3", b"HEADER");
    let requested = urls(&["https://radio.example.org/ep.mp3", "https://news.example.org/ep.mp3", "https://example.org/get?id=1"]);
    let downloaded = download(&requested, storage.path(), &fetcher, 3).await;
    assert_eq!(downloaded, vec![DownloadedFile {
      url: "https://radio.example.org/ep.mp3".to_string(),
      path: storage.path().join("ep.mp3"),
    }]);
    assert_eq!(std::fs::read(storage.path().join("ep.mp3")).unwrap(), b"RADIO");
    assert_eq!(storage_contents(storage.path()), vec!["ep.mp3".to_string()]);
  }

  #[tokio::test]
  async fn parallel_downloads_keep_url_order() {
    let storage = tempfile::tempdir().unwrap();
    let mut fetcher = FakeFetcher::new();
    let mut requested = Vec::new();
    for index in 0..12 {
      let url = format!("https://example.org/{}.mp3", index);
      let status = if index % 3 == 0 { 500 } else { 200 };
      fetcher = fetcher.respond(&url, status, format!("body {}", index).as_bytes());
      requested.push(url);
    }
    let downloaded = download(&requested, storage.path(), &fetcher, 4).await;
    let expected : Vec<String> = requested.iter().enumerate()
      .filter(|(index, _)| index % 3 != 0)
      .map(|(_, url)| url.clone())
      .collect();
    assert_eq!(downloaded.iter().map(|file| file.url.clone()).collect::<Vec<_>>(), expected);
    for file in &downloaded {
      let name = file.path.file_name().unwrap().to_string_lossy().into_owned();
      assert!(file.url.ends_with(&name));
    }
  }
}
