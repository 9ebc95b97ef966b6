use crate::{
    domain::{GroupingMode, SortingMode},
    error::{BoardError, Result},
    storage::GROUPING_PREFERENCE_KEY,
};
use serde::{Deserialize, Serialize};

/// Startup settings for a board session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Key the grouping choice is remembered under
    pub preference_key: String,
    /// Grouping used when nothing valid is stored
    pub default_grouping: GroupingMode,
    /// Sorting at startup; never persisted
    pub default_sorting: SortingMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            preference_key: GROUPING_PREFERENCE_KEY.to_string(),
            default_grouping: GroupingMode::Status,
            default_sorting: SortingMode::None,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(json)?;
        if config.preference_key.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "preference_key must not be empty".to_string(),
            ));
        }
        Ok(config)
    }
}
