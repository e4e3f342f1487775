//! Document acquisition: plain HTTP or a page saved to disk.

use crate::core::DocumentSource;
use crate::utils::error::{Result, ScrapeError};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl DocumentSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        tracing::debug!("HTTP response status: {}", status);

        if !status.is_success() {
            return Err(ScrapeError::AcquisitionError {
                source_name: self.url.clone(),
                message: format!("HTTP {}", status),
            });
        }

        Ok(response.text().await?)
    }
}

/// A page saved earlier, e.g. from a browser when the site rejects plain clients.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ScrapeError::AcquisitionError {
                source_name: self.describe(),
                message: e.to_string(),
            })
    }
}

/// Source picked at runtime from the command line.
#[derive(Debug, Clone)]
pub enum AnySource {
    Http(HttpSource),
    File(FileSource),
}

impl DocumentSource for AnySource {
    fn describe(&self) -> String {
        match self {
            AnySource::Http(source) => source.describe(),
            AnySource::File(source) => source.describe(),
        }
    }

    async fn fetch(&self) -> Result<String> {
        match self {
            AnySource::Http(source) => source.fetch().await,
            AnySource::File(source) => source.fetch().await,
        }
    }
}
