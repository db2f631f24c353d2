// Report configuration loading and validation (report.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config: {source}")]
    ParseError {
        #[from]
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// report.toml structs
// ---------------------------------------------------------------------------

/// Wrapper for the top-level `[report]` table in report.toml.
#[derive(Debug, Clone, Deserialize)]
struct ReportFile {
    report: ReportSection,
}

#[derive(Debug, Clone, Deserialize)]
struct ReportSection {
    #[serde(default = "default_best_manager_threshold")]
    best_manager_threshold: f64,
    #[serde(default = "default_close_score_margin")]
    close_score_margin: f64,
}

fn default_best_manager_threshold() -> f64 {
    99.8
}

fn default_close_score_margin() -> f64 {
    11.0
}

/// Tunables for the weekly reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Percentage of optimal above which managers are grouped as joint best.
    pub best_manager_threshold: f64,
    /// Projected-score margin within which a matchup counts as close.
    pub close_score_margin: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            best_manager_threshold: default_best_manager_threshold(),
            close_score_margin: default_close_score_margin(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

impl ReportConfig {
    /// Parse and validate a report.toml document.
    pub fn from_toml_str(text: &str) -> Result<ReportConfig, ConfigError> {
        let file: ReportFile = toml::from_str(text)?;
        let config = ReportConfig {
            best_manager_threshold: file.report.best_manager_threshold,
            close_score_margin: file.report.close_score_margin,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load report configuration from a TOML file on disk.
    pub fn load_from(path: &Path) -> Result<ReportConfig, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.to_path_buf(),
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0 < self.best_manager_threshold && self.best_manager_threshold <= 100.0) {
            return Err(ConfigError::ValidationError {
                field: "report.best_manager_threshold".into(),
                message: format!(
                    "must be in (0, 100], got {}",
                    self.best_manager_threshold
                ),
            });
        }
        if self.close_score_margin <= 0.0 {
            return Err(ConfigError::ValidationError {
                field: "report.close_score_margin".into(),
                message: format!("must be > 0, got {}", self.close_score_margin),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
