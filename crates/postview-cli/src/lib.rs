mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
