//! Viewer configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ParticipantsError, Result};

/// Configuration for the participant viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows moved by page up/down
    pub page_size: usize,

    /// Live mode file poll interval in milliseconds
    pub poll_interval_ms: u64,

    /// Start in live mode
    pub live: bool,

    /// Flag numbers with an implausible digit count
    pub mark_invalid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 10,
            poll_interval_ms: 500,
            live: false,
            mark_invalid: true,
        }
    }
}

impl Config {
    /// Read a JSON config file; missing fields take their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ParticipantsError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms.max(50))
    }
}
