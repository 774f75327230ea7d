use crate::structures::Tools;

pub const DEFAULT_REPAIR_TOOL: &str = "mp3val";
pub const DEFAULT_FILTER_TOOL: &str = "ffmpeg";

impl Default for Tools {
  fn default() -> Self {
    Self {
      repair: DEFAULT_REPAIR_TOOL.to_string(),
      filter: DEFAULT_FILTER_TOOL.to_string(),
    }
  }
}
