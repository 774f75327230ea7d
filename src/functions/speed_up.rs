use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::structures::{ToolPolicy, Tools, Track};
use crate::traits::ToolRunner;

/// Writes a sped up copy next to every track, returns the copies that exist afterwards.
///
/// Tracks whose file has disappeared are skipped. Under `ToolPolicy::Check` the output of a
/// failed filter run is removed so it never reaches the destination directory.
#[instrument(skip_all)]
pub async fn speed_up(tracks: &[Track], runner: &dyn ToolRunner, tools: &Tools, policy: ToolPolicy) -> Vec<PathBuf> {
  let mut produced = Vec::with_capacity(tracks.len());
  for track in tracks {
    info!("Increasing speed of {} by factor {}", track.path.display(), track.ratio);
    if !is_file(&track.path).await {
      warn!("Problem with {}, did not speed it up", track.path.display());
      continue;
    }

    let output = track.output_path();
    let args : Vec<OsString> = vec![
      "-y".into(),
      "-i".into(),
      track.path.clone().into_os_string(),
      "-filter:a".into(),
      format!("atempo={}", track.ratio).into(),
      "-vn".into(),
      output.clone().into_os_string(),
    ];
    let result = runner.run(&tools.filter, &args).await;
    if !policy.accepts(&tools.filter, &track.path, &result) {
      if let Err(e) = tokio::fs::remove_file(&output).await {
        if e.kind() != std::io::ErrorKind::NotFound {
          warn!("Could not remove {}: {}", output.display(), e);
        }
      }
      continue;
    }
    if is_file(&output).await {
      produced.push(output);
    } else {
      warn!("{} did not produce {}", tools.filter, output.display());
    }
  }
  produced
}

async fn is_file(path: &Path) -> bool {
  tokio::fs::metadata(path).await.map(|metadata| metadata.is_file()).unwrap_or(false)
}
