//! Pure display helpers: duration rendering and column-width math

mod duration;
mod width;

pub use duration::format_duration;
pub use width::{pad_to_width, truncate_to_width};
