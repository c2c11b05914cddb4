//! Record sources feeding the view engine with the raw catalog.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Record, RecordId},
    error::{LoadFailure, LoadFailureKind},
};
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read catalog file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog at '{location}' is not a valid record list: {source}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog at '{location}' contains record id {id} more than once")]
    DuplicateId { location: String, id: RecordId },
    #[error("request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unsupported catalog location '{0}'")]
    UnsupportedLocation(String),
}

impl From<SourceError> for LoadFailure {
    fn from(value: SourceError) -> Self {
        let kind = match &value {
            SourceError::Io { .. } => LoadFailureKind::Io,
            SourceError::Decode { .. } | SourceError::DuplicateId { .. } => {
                LoadFailureKind::Decode
            }
            SourceError::Transport { .. } => LoadFailureKind::Transport,
            SourceError::UnsupportedLocation(_) => LoadFailureKind::UnsupportedSource,
        };
        LoadFailure::new(kind, value.to_string())
    }
}

/// Delivers the ordered record collection once.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human readable location, used in logs.
    fn describe(&self) -> String;
    async fn fetch(&self) -> Result<Vec<Record>, SourceError>;
}

/// Records that are already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.records.len())
    }

    async fn fetch(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.records.clone())
    }
}

/// A JSON array of records stored on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Record>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        decode_records(&self.describe(), &bytes)
    }
}

/// A JSON array of records served over HTTP, fetched with a single GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(http: Client, url: Url) -> Self {
        Self { http, url }
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<Vec<Record>, SourceError> {
        let transport = |source: reqwest::Error| SourceError::Transport {
            url: self.url.to_string(),
            source,
        };
        let body = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .bytes()
            .await
            .map_err(transport)?;
        decode_records(&self.describe(), &body)
    }
}

/// Picks a source for a path or URL. `http`/`https` URLs are fetched over the
/// network, `file://` URLs and plain paths are read from disk.
pub fn source_for_location(location: &str) -> Result<Box<dyn RecordSource>, SourceError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(SourceError::UnsupportedLocation(location.to_string()));
    }

    match Url::parse(location) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(Box::new(HttpSource::new(url))),
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|()| SourceError::UnsupportedLocation(location.to_string()))?;
                Ok(Box::new(JsonFileSource::new(path)))
            }
            // Windows drive letters parse as one-letter schemes.
            scheme if scheme.len() == 1 => Ok(Box::new(JsonFileSource::new(location))),
            _ => Err(SourceError::UnsupportedLocation(location.to_string())),
        },
        Err(_) => Ok(Box::new(JsonFileSource::new(location))),
    }
}

fn decode_records(location: &str, bytes: &[u8]) -> Result<Vec<Record>, SourceError> {
    let records: Vec<Record> =
        serde_json::from_slice(bytes).map_err(|source| SourceError::Decode {
            location: location.to_string(),
            source,
        })?;

    let mut seen = HashSet::with_capacity(records.len());
    if let Some(duplicate) = records.iter().find(|record| !seen.insert(record.id)) {
        return Err(SourceError::DuplicateId {
            location: location.to_string(),
            id: duplicate.id,
        });
    }

    debug!(location, records = records.len(), "decoded catalog");
    Ok(records)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
