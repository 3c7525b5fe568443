pub mod browser;
pub mod config;
pub mod error;
pub mod loader;
pub mod session;
pub mod source;

pub use browser::{FailureKind, Generation, LoadFailure, LoadState, PostBrowser, View};
pub use config::{Config, SourceConfig, resolve_config_path};
pub use error::{Error, Result};
pub use loader::{LoadOutcome, Loader};
pub use session::BrowserSession;
pub use source::{ConfiguredSource, FileSource, HttpSource, PostSource};
