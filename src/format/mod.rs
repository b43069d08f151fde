/// Format layer: filesystem preconditions and the reformat pipeline.
pub mod errors;
mod fs_check;
mod pipeline;

pub use errors::FormatError;
pub use fs_check::{dir_exists, file_exists};
pub use pipeline::{reformat, run};
