use std::path::Path;

use tracing::{debug, error, warn};

use crate::structures::{Error, ToolPolicy, ToolStatus};

impl ToolPolicy {
  /// Whether running `program` on `subject` is considered to have worked.
  pub fn accepts(&self, program: &str, subject: &Path, result: &Result<ToolStatus, Error>) -> bool {
    match result {
      Ok(status) if status.success() => true,
      Ok(status) => match self {
        Self::Ignore => {
          debug!("{} ended with {} for {}", program, status, subject.display());
          true
        },
        Self::Check => {
          error!("{} ended with {} for {}", program, status, subject.display());
          false
        }
      },
      Err(e) => match self {
        Self::Ignore => {
          warn!("Could not run {} for {}: {}", program, subject.display(), e);
          true
        },
        Self::Check => {
          error!("Could not run {} for {}: {}", program, subject.display(), e);
          false
        }
      }
    }
  }
}
