use crate::{
    domain::Dataset,
    error::{BoardError, Result},
    storage::{DataSource, PreferenceStore},
};
use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Preferences kept as a flat JSON object in a single file
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    const DEFAULT_FILE: &'static str = "preferences.json";

    /// Creates a store backed by `preferences.json` inside `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(Self::DEFAULT_FILE),
        }
    }

    /// Creates a store backed by an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path).await?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    async fn ensure_parent_exists(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), value.to_string());

        self.ensure_parent_exists().await?;
        let json = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

/// Dataset stored as a `{ tickets, users }` JSON document on disk
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn fetch(&self) -> Result<Dataset> {
        if !self.path.exists() {
            return Err(BoardError::SourceUnavailable(format!(
                "{} does not exist",
                self.path.display()
            )));
        }

        let contents = fs::read_to_string(&self.path).await?;
        Dataset::from_json(&contents)
    }
}
