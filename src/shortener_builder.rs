use crate::shortener::Shortener;
use crate::structures::{Configuration, HttpFetcher, Stage, SystemRunner};
use crate::traits::{Fetcher, ToolRunner};

pub struct ShortenerBuilder {
  pub(crate) configuration: Configuration,
  pub(crate) fetcher: Option<Box<dyn Fetcher>>,
  pub(crate) runner: Option<Box<dyn ToolRunner>>,
  pub(crate) stage_callback: Option<Box<dyn Fn(Stage) + Send + Sync>>,
}

impl ShortenerBuilder {
  pub fn new(configuration: Configuration) -> Self {
    Self {
      configuration,
      fetcher: None,
      runner: None,
      stage_callback: None,
    }
  }

  /// Replaces the download-async based fetcher
  pub fn set_fetcher(mut self, fetcher: Box<dyn Fetcher>) -> Self {
    self.fetcher = Some(fetcher);
    self
  }

  /// Replaces the runner that spawns the external tools
  pub fn set_runner(mut self, runner: Box<dyn ToolRunner>) -> Self {
    self.runner = Some(runner);
    self
  }

  /// Called whenever the run enters a new stage
  pub fn set_stage_callback(mut self, stage_callback: Box<dyn Fn(Stage) + Send + Sync>) -> Self {
    self.stage_callback = Some(stage_callback);
    self
  }

  pub fn build(self) -> Shortener {
    Shortener {
      configuration: self.configuration,
      fetcher: self.fetcher.unwrap_or_else(|| Box::new(HttpFetcher::new())),
      runner: self.runner.unwrap_or_else(|| Box::new(SystemRunner)),
      stage_callback: match self.stage_callback {
        Some(stage_callback) => stage_callback,
        None => Box::new(|_: Stage| {}),
      },
    }
  }
}
