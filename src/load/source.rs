use std::{collections::HashMap, path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context, Result};

/// Read-only access to data files by base-relative path, e.g. "data/points.geojson".
pub trait DataSource: Send + Sync {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>>;

    /// Human-readable location of `rel`, for logs.
    fn describe(&self, rel: &str) -> String { rel.to_string() }
}

/// Data files under a local base directory.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    fn full(&self, rel: &str) -> PathBuf { self.root.join(rel) }
}

impl DataSource for DirSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        let path = self.full(rel);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("[load] failed to read {}", path.display()))?;
        Ok(Arc::from(bytes))
    }

    fn describe(&self, rel: &str) -> String { self.full(rel).display().to_string() }
}

/// Data files already held in memory, keyed by relative path.
#[derive(Default, Clone)]
pub struct MemSource {
    files: HashMap<String, Arc<[u8]>>,
}

impl MemSource {
    pub fn new(files: HashMap<String, Arc<[u8]>>) -> Self { Self { files } }

    pub fn insert(&mut self, rel: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.files.insert(rel.into(), bytes.into());
    }
}

impl DataSource for MemSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        self.files.get(rel).cloned()
            .ok_or_else(|| anyhow!("[load] missing data file: {rel}"))
    }
}

/// Data files served over HTTP(S) relative to a base URL. One attempt per file, no retries.
#[cfg(feature = "download")]
pub struct HttpSource {
    base: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "download")]
impl HttpSource {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') { base.push('/') }
        Self { base, client: reqwest::blocking::Client::new() }
    }

    fn url(&self, rel: &str) -> String { format!("{}{}", self.base, rel.trim_start_matches('/')) }
}

#[cfg(feature = "download")]
impl DataSource for HttpSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        let url = self.url(rel);
        let response = self.client.get(&url).send()
            .with_context(|| format!("[load] request failed: {url}"))?
            .error_for_status()
            .with_context(|| format!("[load] bad status for {url}"))?;
        let bytes = response.bytes()
            .with_context(|| format!("[load] failed to read body of {url}"))?;
        Ok(Arc::from(bytes.as_ref()))
    }

    fn describe(&self, rel: &str) -> String { self.url(rel) }
}
