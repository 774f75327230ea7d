use std::path::Path;

use async_trait::async_trait;
use download_async::http::HeaderValue;
use tracing::{debug, info, instrument};

use crate::structures::{ChunkSender, Error, FetchResponse, HttpFetcher};
use crate::traits::Fetcher;

/// Redirects followed for one url before it is given up on
pub const MAX_REDIRECTS: usize = 10;

impl HttpFetcher {
  pub fn new() -> Self {
    Self {
      user_agent: format!("shortener ({})", env!("CARGO_PKG_VERSION")),
    }
  }

  fn downloader(&self, url: &str) -> Result<download_async::Downloader, Error> {
    let mut downloader = download_async::Downloader::new();
    downloader.use_uri(url.parse::<download_async::http::Uri>()?);
    if let Some(headers) = downloader.headers() {
      headers.append("User-Agent", HeaderValue::from_str(&self.user_agent)?);
    }
    downloader.allow_http();
    Ok(downloader)
  }

  /// A single GET. Only a success body is written to `destination`.
  async fn get(&self, url: &str, destination: &Path) -> Result<FetchResponse, Error> {
    let downloader = self.downloader(url)?;
    let (mut chunks, receiver) = ChunkSender::channel();
    let downloading = async move {
      let result = downloader.download(download_async::Body::empty(), &mut chunks).await;
      drop(chunks);
      result
    };
    let (downloaded, written) = tokio::join!(downloading, ChunkSender::write_received(receiver, destination));

    // a failed write shows up as a broken pipe on the download side, report the write error instead
    let written = written?;
    match downloaded {
      Ok(parts) => {
        let filename = parts.headers.get("filename")
          .and_then(|value| value.to_str().ok())
          .map(|value| value.to_string());
        debug!("{} answered {} with {} bytes and filename header {:?}", url, parts.status, written, filename);
        Ok(FetchResponse {
          status: parts.status.as_u16(),
          filename,
        })
      },
      // download-async refuses anything but 200 and 206 without handing out the headers
      Err(download_async::Error::StatusError(status)) => {
        debug!("{} answered {}", url, status);
        Ok(FetchResponse {
          status: status.as_u16(),
          filename: None,
        })
      },
      Err(e) => Err(e.into()),
    }
  }

  /// Target of a redirecting `url`, resolved against it
  async fn location(&self, url: &str) -> Result<String, Error> {
    let client = hyper::Client::builder().build::<_, hyper::Body>(hyper_tls::HttpsConnector::new());
    let request = hyper::Request::get(url)
      .header(hyper::header::USER_AGENT, self.user_agent.as_str())
      .body(hyper::Body::empty())?;
    let response = client.request(request).await?;
    let location = response.headers().get(hyper::header::LOCATION)
      .and_then(|value| value.to_str().ok())
      .map(|value| value.to_string())
      .ok_or_else(|| Error::MissingLocation(url.to_string()))?;
    Ok(url::Url::parse(url)?.join(&location)?.to_string())
  }
}

impl Default for HttpFetcher {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl Fetcher for HttpFetcher {
  #[instrument(skip(self))]
  async fn fetch(&self, url: &str, destination: &Path) -> Result<FetchResponse, Error> {
    let mut current = url.to_string();
    for hop in 0..=MAX_REDIRECTS {
      let response = self.get(&current, destination).await?;
      if !response.is_redirect() {
        return Ok(response);
      }
      if hop == MAX_REDIRECTS {
        break;
      }
      let target = self.location(&current).await?;
      info!("{} redirects to {}", current, target);
      current = target;
    }
    Err(Error::TooManyRedirects(url.to_string()))
  }
}
