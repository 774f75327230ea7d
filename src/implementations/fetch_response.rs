use crate::structures::FetchResponse;

impl FetchResponse {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }

  pub fn is_redirect(&self) -> bool {
    (300..400).contains(&self.status)
  }

  /// The `filename` header, if the server sent a non-empty one
  pub fn filename(&self) -> Option<&str> {
    self.filename.as_deref().map(str::trim).filter(|name| !name.is_empty())
  }
}
