use std::ffi::OsString;

use async_trait::async_trait;

use crate::structures::{Error, ToolStatus};

#[async_trait]
pub trait ToolRunner: Send + Sync {
  /// Runs `program` with `args` to completion.
  async fn run(&self, program: &str, args: &[OsString]) -> Result<ToolStatus, Error>;
}
