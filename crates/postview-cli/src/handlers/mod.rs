pub mod browse;
pub mod config;
pub mod list;
pub mod show;
