use std::path::Path;

use tracing::{debug, info, instrument};

use crate::structures::Error;

/// Reads one url per line, dropping trailing whitespace and blank lines.
#[instrument]
pub async fn read_urls(url_file: &Path) -> Result<Vec<String>, Error> {
  let text = tokio::fs::read_to_string(url_file).await?;
  let mut urls = Vec::new();
  for (number, line) in text.lines().enumerate() {
    let url = line.trim_end();
    if url.trim_start().is_empty() {
      debug!("Skipping blank line {} of {}", number + 1, url_file.display());
      continue;
    }
    info!("{}", url);
    urls.push(url.to_string());
  }
  Ok(urls)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn strips_trailing_whitespace_and_skips_blank_lines() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("urls.txt");
    std::fs::write(&path, "https://example.org/a.mp3  \r\n\n   \nhttps://example.org/b.mp3\t\nhttps://example.org/c.mp3").unwrap();
    let urls = read_urls(&path).await.unwrap();
    assert_eq!(urls, vec![
      "https://example.org/a.mp3".to_string(),
      "https://example.org/b.mp3".to_string(),
      "https://example.org/c.mp3".to_string(),
    ]);
  }

  #[tokio::test]
  async fn missing_file_is_an_error() {
    let directory = tempfile::tempdir().unwrap();
    assert!(matches!(read_urls(&directory.path().join("urls.txt")).await, Err(Error::IoError(_))));
  }
}
