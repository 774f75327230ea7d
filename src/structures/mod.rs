pub mod error;
pub use error::Error;

pub mod configuration;
pub use configuration::Configuration;

pub mod ratio_table;
pub use ratio_table::RatioTable;

pub mod downloaded_file;
pub use downloaded_file::DownloadedFile;

pub mod track;
pub use track::Track;

pub mod tools;
pub use tools::Tools;

pub mod tool_status;
pub use tool_status::ToolStatus;

pub mod tool_policy;
pub use tool_policy::ToolPolicy;

pub mod fetch_response;
pub use fetch_response::FetchResponse;

pub mod run_report;
pub use run_report::RunReport;

pub(crate) mod chunk_sender;
pub(crate) use chunk_sender::ChunkSender;

pub mod http_fetcher;
pub use http_fetcher::HttpFetcher;

pub mod system_runner;
pub use system_runner::SystemRunner;

pub mod stage;
pub use stage::Stage;
