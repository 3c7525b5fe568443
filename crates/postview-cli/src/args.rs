use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postview")]
#[command(about = "Browse posts from a JSON API in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Posts endpoint (overrides source.url from the config file)")]
    pub url: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Read posts from a local JSON file instead of the endpoint"
    )]
    pub file: Option<PathBuf>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, global = true, help = "Config file path")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Write logs to this file (the only log sink in browse mode)")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive list/detail browser (default)
    Browse,

    /// Fetch once and print post titles
    List {
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Fetch once and print a single post
    Show { id: u64 },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Browse))
    }
}
