mod chunk_sender;
mod configuration;
mod error;
mod fetch_response;
mod http_fetcher;
mod ratio_table;
mod run_report;
mod stage;
mod system_runner;
mod tool_policy;
mod tool_status;
mod tools;
mod track;

pub use configuration::CONFIG_FILE_NAME;
pub use http_fetcher::MAX_REDIRECTS;
pub use ratio_table::DEFAULT_KEY;
pub use tools::{DEFAULT_FILTER_TOOL, DEFAULT_REPAIR_TOOL};
