//! Configuration structures for the challan pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::challan::rules::{AmountPolicy, OverrideMode};

/// Main configuration for the challan pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallanConfig {
    /// Section map configuration.
    pub sections: SectionConfig,

    /// Record extraction configuration.
    pub extraction: ExtractionConfig,

    /// Spreadsheet and rename configuration.
    pub output: OutputConfig,
}

/// Section code mapping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// Override file name, resolved against the input directory.
    pub map_file: PathBuf,

    /// How the override file combines with the built-in codes.
    pub override_mode: OverrideMode,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            map_file: PathBuf::from("section_map.txt"),
            override_mode: OverrideMode::Replace,
        }
    }
}

/// Record extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// How amount strings with a fractional part are treated.
    pub amount_policy: AmountPolicy,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spreadsheet file name prefix.
    pub file_prefix: String,

    /// chrono format for the spreadsheet file name timestamp.
    pub timestamp_format: String,

    /// Characters added to the longest cell when fitting column widths.
    pub column_margin: usize,

    /// Rename source PDFs after the spreadsheet is written.
    pub rename_files: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_prefix: "challans".to_string(),
            timestamp_format: "%Y%m%d_%H%M%S".to_string(),
            column_margin: 2,
            rename_files: true,
        }
    }
}

impl ChallanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Spreadsheet file name for the given local time.
    pub fn workbook_name(&self, now: chrono::NaiveDateTime) -> String {
        format!(
            "{}_{}.xlsx",
            self.output.file_prefix,
            now.format(&self.output.timestamp_format)
        )
    }
}
