/// Exit code of an external program, `None` if it was killed by a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
  pub code: Option<i32>,
}
