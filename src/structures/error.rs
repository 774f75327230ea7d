use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
  /// The destination directory is missing, not a directory, or read-only
  DestinationUnavailable(PathBuf),
  /// The configuration file is well-formed JSON but misses or mistypes a field
  InvalidConfig(String),
  /// Url and the status code the server answered with
  InvalidStatus(String, u16),
  /// No file name could be derived for this url
  NoFilename(String),
  /// Url that kept redirecting past the hop limit
  TooManyRedirects(String),
  /// Url that answered with a redirect but no usable `Location`
  MissingLocation(String),
  /// Url whose file would replace one already downloaded in this run
  DuplicateFileName(String, PathBuf),
  IoError(std::io::Error),
  JsonError(json::Error),
  UrlError(url::ParseError),
  InvalidUri(download_async::http::uri::InvalidUri),
  InvalidHeaderValue(download_async::http::header::InvalidHeaderValue),
  HttpError(download_async::http::Error),
  HyperError(hyper::Error),
  DownloadAsyncError(download_async::Error),
}
