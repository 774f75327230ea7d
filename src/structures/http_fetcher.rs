/// `Fetcher` backed by download-async
#[derive(Debug, Clone)]
pub struct HttpFetcher {
  pub(crate) user_agent: String,
}
