use std::ffi::OsString;
use std::process::Stdio;

use async_trait::async_trait;
use tracing::instrument;

use crate::structures::{Error, SystemRunner, ToolStatus};
use crate::traits::ToolRunner;

#[async_trait]
impl ToolRunner for SystemRunner {
  #[instrument(skip(self))]
  async fn run(&self, program: &str, args: &[OsString]) -> Result<ToolStatus, Error> {
    let status = tokio::process::Command::new(program)
      .args(args)
      .stdin(Stdio::null())
      .status()
      .await?;
    Ok(ToolStatus { code: status.code() })
  }
}
