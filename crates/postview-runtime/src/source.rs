use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use postview_types::{Post, decode_posts};
use reqwest::header::ACCEPT;
use tracing::{debug, info};

use crate::config::SourceConfig;
use crate::{Error, Result};

/// Where posts come from.
///
/// A fetch reads the whole collection at once; there is no partial or
/// streaming consumption.
pub trait PostSource: Send + Sync + 'static {
    /// Human-readable origin, used in messages
    fn describe(&self) -> String;

    fn fetch(&self) -> impl Future<Output = Result<Vec<Post>>> + Send;
}

/// Single GET of a JSON endpoint
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Self::new(config.url.clone(), config.timeout())
    }
}

impl PostSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Post>> {
        debug!(url = %self.url, "fetching posts");

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::fetch(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(&self.url, format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::fetch(&self.url, e))?;

        let posts = decode_posts(&bytes).map_err(|error| Error::DecodeFailed {
            origin: self.url.clone(),
            error,
        })?;

        info!(url = %self.url, count = posts.len(), "fetched posts");
        Ok(posts)
    }
}

/// Local JSON file with the same shape as the remote collection
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PostSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Post>> {
        let origin = self.describe();
        debug!(path = %origin, "reading posts");

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::fetch(&origin, e))?;

        decode_posts(&bytes).map_err(|error| Error::DecodeFailed { origin, error })
    }
}

/// The source selected by command-line flags and configuration
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Http(HttpSource),
    File(FileSource),
}

impl ConfiguredSource {
    pub fn resolve(config: &SourceConfig, file: Option<PathBuf>) -> Result<Self> {
        match file {
            Some(path) => Ok(Self::File(FileSource::new(path))),
            None => Ok(Self::Http(HttpSource::from_config(config)?)),
        }
    }
}

impl PostSource for ConfiguredSource {
    fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.describe(),
            Self::File(source) => source.describe(),
        }
    }

    async fn fetch(&self) -> Result<Vec<Post>> {
        match self {
            Self::Http(source) => source.fetch().await,
            Self::File(source) => source.fetch().await,
        }
    }
}
