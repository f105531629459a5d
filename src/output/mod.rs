pub mod formatter;

pub use formatter::{format_result, should_use_colors, write_result};
