mod check_destination;
mod collect;
mod correct;
mod download;
mod flow;
mod leftover;
mod list_files;
mod move_file;
mod read_urls;
mod resolve_ratios;
mod shortened_path;
mod speed_up;

pub use check_destination::check_destination as check_destination;
pub use collect::collect as collect;
pub use correct::{correct, AUDIO_EXTENSION};
pub use download::download as download;
pub use flow::flow as flow;
pub use leftover::{leftover, print_leftover};
pub(crate) use list_files::list_files as list_files;
pub(crate) use move_file::move_file as move_file;
pub use read_urls::read_urls as read_urls;
pub use resolve_ratios::resolve_ratios as resolve_ratios;
pub use shortened_path::{is_shortened, shortened_path, SHORT_SUFFIX};
pub use speed_up::speed_up as speed_up;
