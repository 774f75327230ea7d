use crate::structures::Error;

impl std::error::Error for Error { }

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::DestinationUnavailable(path) => write!(f, "output directory {} is not available", path.display()),
      Self::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
      Self::InvalidStatus(url, status) => write!(f, "{} answered with status {}", url, status),
      Self::NoFilename(url) => write!(f, "cannot derive a file name from {}", url),
      Self::TooManyRedirects(url) => write!(f, "{} redirected too many times", url),
      Self::MissingLocation(url) => write!(f, "{} redirected without a location", url),
      Self::DuplicateFileName(url, path) => write!(f, "{} would overwrite {}, downloaded earlier in this run", url, path.display()),
      Self::IoError(error) => write!(f, "io error: {}", error),
      Self::JsonError(error) => write!(f, "json error: {}", error),
      Self::UrlError(error) => write!(f, "url error: {}", error),
      Self::InvalidUri(error) => write!(f, "invalid uri: {}", error),
      Self::InvalidHeaderValue(error) => write!(f, "invalid header value: {}", error),
      Self::HttpError(error) => write!(f, "http error: {}", error),
      Self::HyperError(error) => write!(f, "hyper error: {}", error),
      Self::DownloadAsyncError(error) => write!(f, "download error: {}", error),
    }
  }
}

impl From<std::io::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::io::Error) -> Self {
    log_error(&error);
    Self::IoError(error)
  }
}

impl From<json::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: json::Error) -> Self {
    log_error(&error);
    Self::JsonError(error)
  }
}

impl From<url::ParseError> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: url::ParseError) -> Self {
    log_error(&error);
    Self::UrlError(error)
  }
}

impl From<download_async::http::uri::InvalidUri> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: download_async::http::uri::InvalidUri) -> Self {
    log_error(&error);
    Self::InvalidUri(error)
  }
}

impl From<download_async::http::header::InvalidHeaderValue> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: download_async::http::header::InvalidHeaderValue) -> Self {
    log_error(&error);
    Self::InvalidHeaderValue(error)
  }
}

impl From<download_async::http::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: download_async::http::Error) -> Self {
    log_error(&error);
    Self::HttpError(error)
  }
}

impl From<hyper::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: hyper::Error) -> Self {
    log_error(&error);
    Self::HyperError(error)
  }
}

impl From<download_async::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: download_async::Error) -> Self {
    log_error(&error);
    Self::DownloadAsyncError(error)
  }
}

#[track_caller]
fn log_error(error: &(impl std::error::Error + ?Sized)) {
  let location = core::panic::Location::caller();
  tracing::error!("{}:{}: {:?}", location.file(), location.line(), error);
}
