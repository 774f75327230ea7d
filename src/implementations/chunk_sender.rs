use std::io::Write;
use std::path::Path;

use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::structures::{ChunkSender, Error};

impl ChunkSender {
  pub(crate) fn channel() -> (Self, UnboundedReceiver<Vec<u8>>) {
    let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
    (Self { sender }, receiver)
  }

  /// Writes every chunk from `receiver` to `destination` until the sender is dropped.
  ///
  /// Returns the number of bytes written.
  pub(crate) async fn write_received(mut receiver: UnboundedReceiver<Vec<u8>>, destination: &Path) -> Result<u64, Error> {
    let file = tokio::fs::File::create(destination).await?;
    let mut writer = tokio::io::BufWriter::new(file);
    let mut written = 0;
    while let Some(chunk) = receiver.recv().await {
      writer.write_all(&chunk).await?;
      written += chunk.len() as u64;
    }
    writer.flush().await?;
    Ok(written)
  }
}

impl Write for ChunkSender {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.sender.send(buf.to_vec())
      .map_err(|_| std::io::Error::new(std::io::ErrorKind::BrokenPipe, "file writer stopped"))?;
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn chunks_end_up_in_the_file() {
    let storage = tempfile::tempdir().unwrap();
    let destination = storage.path().join("a.part");
    let (mut chunks, receiver) = ChunkSender::channel();
    chunks.write_all(b"ID3 ").unwrap();
    chunks.write_all(b"frames").unwrap();
    drop(chunks);
    let written = ChunkSender::write_received(receiver, &destination).await.unwrap();
    assert_eq!(written, 10);
    assert_eq!(std::fs::read(&destination).unwrap(), b"ID3 frames");
  }

  #[test]
  fn writing_without_a_writer_is_a_broken_pipe() {
    let (mut chunks, receiver) = ChunkSender::channel();
    drop(receiver);
    let error = chunks.write_all(b"lost").unwrap_err();
    assert_eq!(error.kind(), std::io::ErrorKind::BrokenPipe);
  }
}
