use tokio::sync::mpsc::UnboundedSender;

/// Synchronous `Write` end of a channel whose chunks are written to a file by an async task
pub(crate) struct ChunkSender {
  pub(crate) sender: UnboundedSender<Vec<u8>>,
}
