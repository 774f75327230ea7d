use crate::structures::ToolStatus;

impl ToolStatus {
  pub fn success(&self) -> bool {
    self.code == Some(0)
  }
}

impl std::fmt::Display for ToolStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self.code {
      Some(code) => write!(f, "exit code {}", code),
      None => write!(f, "a signal"),
    }
  }
}
