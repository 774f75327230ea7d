use crate::functions::flow;
use crate::structures::{Configuration, Error, RunReport, Stage};
use crate::traits::{Fetcher, ToolRunner};

/// Downloads, repairs, speeds up and delivers the files listed in a configuration
pub struct Shortener {
  pub(crate) configuration: Configuration,
  pub(crate) fetcher: Box<dyn Fetcher>,
  pub(crate) runner: Box<dyn ToolRunner>,
  pub(crate) stage_callback: Box<dyn Fn(Stage) + Send + Sync>,
}

impl Shortener {
  pub fn configuration(&self) -> &Configuration {
    &self.configuration
  }

  pub async fn run(&self) -> Result<RunReport, Error> {
    flow(&self.configuration, self.fetcher.as_ref(), self.runner.as_ref(), self.stage_callback.as_ref()).await
  }
}
