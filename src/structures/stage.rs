/// Steps of a run, always passed through in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
  ValidateDestination,
  LoadUrls,
  Download,
  ResolveRatios,
  Correct,
  Transform,
  Collect,
  Report,
  Done,
}
