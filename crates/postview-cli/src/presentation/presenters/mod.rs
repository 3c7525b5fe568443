pub mod config;
pub mod post;
pub mod screen;

pub use config::{present_config, present_config_init};
pub use post::{present_post_detail, present_post_list};
pub use screen::build_screen;
