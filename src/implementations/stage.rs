use crate::structures::Stage;

impl std::fmt::Display for Stage {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let description = match self {
      Self::ValidateDestination => "Checking output directory",
      Self::LoadUrls => "Reading urls",
      Self::Download => "Downloading",
      Self::ResolveRatios => "Looking up ratios",
      Self::Correct => "Correcting mp3 files",
      Self::Transform => "Speeding up",
      Self::Collect => "Moving to output directory",
      Self::Report => "Reporting",
      Self::Done => "Done",
    };
    f.write_str(description)
  }
}
