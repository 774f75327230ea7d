use std::ffi::OsString;
use std::path::Path;

use tracing::{info, instrument};

use crate::functions::list_files;
use crate::structures::{Error, ToolPolicy, Tools};
use crate::traits::ToolRunner;

/// Extension of the files the repair tool understands
pub const AUDIO_EXTENSION: &str = "mp3";

/// Runs the repair tool over every mp3 file in `storage`, one file at a time.
#[instrument(skip(runner))]
pub async fn correct(storage: &Path, runner: &dyn ToolRunner, tools: &Tools, policy: ToolPolicy) -> Result<(), Error> {
  let files = list_files(storage, |path| path.extension().map_or(false, |extension| extension == AUDIO_EXTENSION)).await?;
  for file in files {
    let file = tokio::fs::canonicalize(&file).await.unwrap_or(file);
    info!("Correcting {}", file.display());
    let args : Vec<OsString> = vec!["-f".into(), file.clone().into_os_string()];
    let result = runner.run(&tools.repair, &args).await;
    policy.accepts(&tools.repair, &file, &result);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tests::fakes::FakeRunner;

  #[tokio::test]
  async fn repairs_each_mp3_once_with_absolute_path() {
    let storage = tempfile::tempdir().unwrap();
    std::fs::write(storage.path().join("b.mp3"), b"b").unwrap();
    std::fs::write(storage.path().join("a.mp3"), b"a").unwrap();
    std::fs::write(storage.path().join("notes.txt"), b"not audio").unwrap();
    std::fs::create_dir(storage.path().join("folder.mp3")).unwrap();

    let runner = FakeRunner::new();
    correct(storage.path(), &runner, &Tools::default(), ToolPolicy::Ignore).await.unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    let root = std::fs::canonicalize(storage.path()).unwrap();
    for ((program, args), name) in calls.iter().zip(["a.mp3", "b.mp3"]) {
      assert_eq!(program, "mp3val");
      assert_eq!(args, &vec![OsString::from("-f"), root.join(name).into_os_string()]);
      assert!(Path::new(&args[1]).is_absolute());
    }
  }

  #[tokio::test]
  async fn failing_tool_does_not_stop_the_run() {
    let storage = tempfile::tempdir().unwrap();
    std::fs::write(storage.path().join("a.mp3"), b"a").unwrap();
    std::fs::write(storage.path().join("b.mp3"), b"b").unwrap();
    let runner = FakeRunner::failing(2);
    assert!(correct(storage.path(), &runner, &Tools::default(), ToolPolicy::Check).await.is_ok());
    assert_eq!(runner.calls().len(), 2);
  }
}
