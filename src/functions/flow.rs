use tracing::{info, instrument};

use crate::functions::{check_destination, collect, correct, download, leftover, print_leftover, read_urls, resolve_ratios, speed_up};
use crate::structures::{Configuration, Error, RunReport, Stage};
use crate::traits::{Fetcher, ToolRunner};

/// Runs every stage once, in order.
///
/// Only an unusable destination directory or an unreadable url list end the run early, everything
/// that goes wrong with a single url is logged and shows up in the returned report.
#[instrument(skip_all)]
pub async fn flow(configuration: &Configuration, fetcher: &dyn Fetcher, runner: &dyn ToolRunner, stage_callback: &(dyn Fn(Stage) + Send + Sync)) -> Result<RunReport, Error> {
  let enter = |stage: Stage| {
    info!("Current stage: {}", stage);
    stage_callback(stage);
  };

  enter(Stage::ValidateDestination);
  check_destination(&configuration.destination).await?;

  enter(Stage::LoadUrls);
  let urls = read_urls(&configuration.url_file).await?;
  info!("Read {} urls from {}", urls.len(), configuration.url_file.display());

  enter(Stage::Download);
  tokio::fs::create_dir_all(&configuration.storage).await?;
  let downloaded = download(&urls, &configuration.storage, fetcher, configuration.parallel_downloads).await;
  info!("Downloaded {} of {} urls", downloaded.len(), urls.len());

  enter(Stage::ResolveRatios);
  let tracks = resolve_ratios(downloaded, &configuration.ratios);

  enter(Stage::Correct);
  correct(&configuration.storage, runner, &configuration.tools, configuration.tool_policy).await?;

  enter(Stage::Transform);
  let produced = speed_up(&tracks, runner, &configuration.tools, configuration.tool_policy).await;
  info!("Sped up {} of {} files", produced.len(), tracks.len());

  enter(Stage::Collect);
  let (moved, not_moved) = collect(&configuration.storage, &configuration.destination).await?;

  enter(Stage::Report);
  let leftover = leftover(&urls, tracks.iter().map(|track| track.url.as_str()));
  print_leftover(&leftover);

  enter(Stage::Done);
  Ok(RunReport {
    tracks,
    moved,
    not_moved,
    leftover,
  })
}
