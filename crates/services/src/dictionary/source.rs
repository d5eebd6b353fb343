use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;

use conjuga_core::model::VerbDictionary;

use crate::error::DictionaryLoadError;

/// Where the verb dictionary comes from.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    /// Fetch and parse the dictionary.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryLoadError` if the document cannot be fetched or parsed.
    async fn load(&self) -> Result<VerbDictionary, DictionaryLoadError>;
}

/// Reads `verbs.json` from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DictionarySource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn load(&self) -> Result<VerbDictionary, DictionaryLoadError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DictionaryLoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(VerbDictionary::from_json(&raw)?)
    }
}

/// Cache directive sent with the dictionary request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheHint {
    /// Let intermediaries apply their usual caching.
    #[default]
    Default,
    /// Ask for revalidation so an edited dictionary is picked up.
    NoCache,
}

impl CacheHint {
    fn header_value(self) -> Option<&'static str> {
        match self {
            CacheHint::Default => None,
            CacheHint::NoCache => Some("no-cache"),
        }
    }
}

/// Fetches the dictionary over HTTP once.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
    cache: CacheHint,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            cache: CacheHint::Default,
        }
    }

    #[must_use]
    pub fn with_cache_hint(mut self, cache: CacheHint) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DictionarySource for HttpSource {
    fn describe(&self) -> String {
        format!("url {}", self.url)
    }

    async fn load(&self) -> Result<VerbDictionary, DictionaryLoadError> {
        let mut request = self.client.get(&self.url);
        if let Some(value) = self.cache.header_value() {
            request = request.header(CACHE_CONTROL, value);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(DictionaryLoadError::HttpStatus(response.status()));
        }

        let raw = response.text().await?;
        Ok(VerbDictionary::from_json(&raw)?)
    }
}

/// Dictionary document held in memory (bundled data, tests).
#[derive(Debug, Clone)]
pub struct StaticSource {
    raw: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

#[async_trait]
impl DictionarySource for StaticSource {
    fn describe(&self) -> String {
        format!("inline document ({} bytes)", self.raw.len())
    }

    async fn load(&self) -> Result<VerbDictionary, DictionaryLoadError> {
        Ok(VerbDictionary::from_json(&self.raw)?)
    }
}
