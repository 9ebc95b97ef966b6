use crate::{domain::Dataset, error::Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

pub mod file_storage;

pub use file_storage::{FileDataSource, FilePreferenceStore};

/// Key under which the grouping choice is remembered
pub const GROUPING_PREFERENCE_KEY: &str = "groupingOption";

/// Small key-value store for UI preferences
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Reads a value, `None` if the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Provider of the initial tickets and users
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Loads the full dataset; called once per session
    async fn fetch(&self) -> Result<Dataset>;
}

/// Preferences held in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values: Mutex::new(values),
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Data source that hands out a fixed dataset
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    dataset: Dataset,
}

impl StaticDataSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch(&self) -> Result<Dataset> {
        Ok(self.dataset.clone())
    }
}
