mod fetcher;
mod tool_runner;

pub use fetcher::Fetcher;
pub use tool_runner::ToolRunner;
