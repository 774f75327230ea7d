use shortener::{Configuration, Error, RunReport, ShortenerBuilder};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn run() -> Result<RunReport, Error> {
  let location = Configuration::default_location()?;
  let configuration = Configuration::load(&location).await?;
  let shortener = ShortenerBuilder::new(configuration).build();
  shortener.run().await
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let code = match run().await {
    Ok(report) => {
      info!("Delivered {} files, {} urls could not be downloaded", report.moved.len(), report.leftover.len());
      0
    },
    // already logged by the destination check
    Err(Error::DestinationUnavailable(_)) => -1,
    Err(e) => {
      error!("{}", e);
      1
    }
  };
  std::process::exit(code);
}
