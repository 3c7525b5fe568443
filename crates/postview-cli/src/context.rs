use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use postview_runtime::{Config, ConfiguredSource, resolve_config_path};
use std::path::PathBuf;

use crate::args::Cli;
use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;

/// Everything a handler needs, resolved once from flags and the config file
pub struct ExecutionContext {
    pub config_path: PathBuf,
    pub config: Config,
    pub file: Option<PathBuf>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(cli: &Cli) -> Result<Self> {
        let config_path = resolve_config_path(cli.config.as_deref())?;
        let config = Config::load_from(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?
            .with_overrides(cli.url.clone(), cli.timeout);
        config.validate()?;

        Ok(Self {
            config_path,
            config,
            file: cli.file.clone(),
            format: cli.format,
        })
    }

    pub fn source(&self) -> Result<ConfiguredSource> {
        Ok(ConfiguredSource::resolve(&self.config.source, self.file.clone())?)
    }

    /// Multi-threaded runtime so fetches make progress while the UI thread
    /// blocks on terminal input.
    pub fn runtime(&self) -> Result<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to build tokio runtime")
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.json_mode(), std::io::stdout().is_terminal())
    }

    /// Column budget for one-line titles, when printing to a terminal
    pub fn title_width(&self) -> Option<usize> {
        if self.json_mode() || !std::io::stdout().is_terminal() {
            return None;
        }
        terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize)
    }
}
