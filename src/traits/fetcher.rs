use std::path::Path;

use async_trait::async_trait;

use crate::structures::{Error, FetchResponse};

#[async_trait]
pub trait Fetcher: Send + Sync {
  /// Issues a GET for `url`, following redirects, and streams a success body into `destination`.
  ///
  /// Any final status comes back as a response. An `Err` means no usable response was received at all.
  async fn fetch(&self, url: &str, destination: &Path) -> Result<FetchResponse, Error>;
}
