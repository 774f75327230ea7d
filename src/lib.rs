//Modules
pub mod functions;
mod implementations;
pub mod shortener;
pub mod shortener_builder;
pub mod structures;
pub mod traits;


pub use crate::implementations::{CONFIG_FILE_NAME, DEFAULT_FILTER_TOOL, DEFAULT_KEY, DEFAULT_REPAIR_TOOL, MAX_REDIRECTS};
pub use crate::shortener::Shortener;
pub use crate::shortener_builder::ShortenerBuilder;
pub use crate::structures::{Configuration, Error, RunReport, Stage};
