//! Dashboard Configuration
//! Optional JSON settings file read at startup.

use crate::analysis::TOP_WORDS;
use crate::data::DEFAULT_EXTRA_STOPWORDS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "review_dashboard.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How charts are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    /// Zoomable egui_plot charts
    #[default]
    Interactive,
    /// Bitmap charts drawn with plotters, exportable as PNG
    Static,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub stopword_language: String,
    pub extra_stopwords: Vec<String>,
    pub top_words: usize,
    pub word_cloud_words: usize,
    pub preview_rows: usize,
    pub filtered_rows: usize,
    pub chart_style: ChartStyle,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("ulasan_shopee_static.csv"),
            stopword_language: "id".to_string(),
            extra_stopwords: DEFAULT_EXTRA_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            top_words: TOP_WORDS,
            word_cloud_words: 200,
            preview_rows: 50,
            filtered_rows: 20,
            chart_style: ChartStyle::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read `path` when it exists. A missing or broken file yields the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }
}
