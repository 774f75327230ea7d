use crate::structures::RunReport;

impl RunReport {
  /// Whether every requested url made it into the destination directory
  pub fn is_complete(&self) -> bool {
    self.leftover.is_empty() && self.not_moved.is_empty() && self.moved.len() == self.tracks.len()
  }
}
