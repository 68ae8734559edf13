use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{
    ConfigContentProvider, ConfigManager, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub const BEST_SCORE_FILE: &str = "snake_best_score.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub best_score: u32,
}

impl Validate for BestScoreRecord {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// The single persisted scalar: highest score reached on this machine.
pub struct BestScoreStore<P: ConfigContentProvider = FileContentConfigProvider> {
    manager: ConfigManager<P, BestScoreRecord, YamlConfigSerializer>,
}

impl BestScoreStore<FileContentConfigProvider> {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(path))
    }
}

impl<P: ConfigContentProvider> BestScoreStore<P> {
    pub fn new(provider: P) -> Self {
        Self {
            manager: ConfigManager::new(provider, YamlConfigSerializer::new()),
        }
    }

    pub fn best_score(&self) -> Result<u32, String> {
        Ok(self.manager.get_config()?.best_score)
    }

    /// Stores `score` if it beats the current best. Returns whether it did.
    pub fn record(&self, score: u32) -> Result<bool, String> {
        if score <= self.best_score()? {
            return Ok(false);
        }
        self.manager.set_config(&BestScoreRecord { best_score: score })?;
        Ok(true)
    }
}
