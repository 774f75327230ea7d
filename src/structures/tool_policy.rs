/// What to do with the exit status of an external program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolPolicy {
  /// Fire and forget, the status is only traced
  #[default]
  Ignore,
  /// A non-zero status counts as a failure of that file
  Check,
}
