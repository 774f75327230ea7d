/// What a `Fetcher` learned from the server besides the body
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
  pub status: u16,
  /// Value of the `filename` response header
  pub filename: Option<String>,
}
