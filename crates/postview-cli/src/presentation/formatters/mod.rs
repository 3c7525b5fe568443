pub mod text;
pub mod time;

pub use text::{first_line, truncate_text};
pub use time::format_clock;
