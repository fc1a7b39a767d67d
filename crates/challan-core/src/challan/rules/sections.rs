//! Nature-of-payment code to section label mapping.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Built-in section codes.
pub const DEFAULT_SECTIONS: [(&str, &str); 5] = [
    ("94C", "194C - Works Contract"),
    ("94H", "194H - Commission / Brokerage"),
    ("94I", "194I(b) - Land / Building rent"),
    ("94J", "194J - Fees / Royalty (Others)"),
    ("94Q", "194Q - Purchase of goods"),
];

/// How an override file combines with the built-in codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideMode {
    /// The file replaces the built-in map entirely.
    #[default]
    Replace,
    /// File entries are laid over the built-in map key by key.
    Merge,
}

/// Section code lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap {
    entries: HashMap<String, String>,
}

impl Default for SectionMap {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SECTIONS
                .iter()
                .map(|(code, label)| (code.to_string(), label.to_string()))
                .collect(),
        }
    }
}

impl SectionMap {
    /// An empty map; every code resolves to itself.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build the map from an optional override file.
    ///
    /// A missing file leaves the built-in codes in place.
    pub fn load(path: &Path, mode: OverrideMode) -> std::io::Result<Self> {
        if !path.exists() {
            debug!("No section map at {}, using built-in codes", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let overrides = parse_overrides(&content);
        debug!(
            "Loaded {} section overrides from {} ({:?})",
            overrides.len(),
            path.display(),
            mode
        );

        let mut map = match mode {
            OverrideMode::Replace => Self::empty(),
            OverrideMode::Merge => Self::default(),
        };
        map.entries.extend(overrides);
        Ok(map)
    }

    /// Label for `code`, or `code` itself when unmapped.
    pub fn resolve(&self, code: &str) -> String {
        self.entries
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve `code` against `map`.
pub fn resolve(code: &str, map: &SectionMap) -> String {
    map.resolve(code)
}

/// Parse `KEY = VALUE` lines. Blank lines and lines without `=` are skipped;
/// the split is on the first `=`.
pub fn parse_overrides(text: &str) -> Vec<(String, String)> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_defaults() {
        let map = SectionMap::default();
        assert_eq!(resolve("94C", &map), "194C - Works Contract");
        assert_eq!(resolve("94Q", &map), "194Q - Purchase of goods");
        assert_eq!(resolve("UNKNOWN", &map), "UNKNOWN");
        assert_eq!(resolve("", &map), "");
    }

    #[test]
    fn test_parse_overrides() {
        let text = "94C = Contractors\n\n# no equals here\n 92B=Salary = Non Govt \n";
        assert_eq!(
            parse_overrides(text),
            vec![
                ("94C".to_string(), "Contractors".to_string()),
                ("92B".to_string(), "Salary = Non Govt".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let map = SectionMap::load(&dir.path().join("section_map.txt"), OverrideMode::Replace)
            .unwrap();
        assert_eq!(map, SectionMap::default());
    }

    #[test]
    fn test_replace_mode_drops_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("section_map.txt");
        fs::write(&path, "94C = Contractors\n").unwrap();

        let map = SectionMap::load(&path, OverrideMode::Replace).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.resolve("94C"), "Contractors");
        assert_eq!(map.resolve("94J"), "94J");
    }

    #[test]
    fn test_merge_mode_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("section_map.txt");
        fs::write(&path, "94C = Contractors\n92B = Salary\n").unwrap();

        let map = SectionMap::load(&path, OverrideMode::Merge).unwrap();
        assert_eq!(map.len(), 6);
        assert_eq!(map.resolve("94C"), "Contractors");
        assert_eq!(map.resolve("92B"), "Salary");
        assert_eq!(map.resolve("94J"), "194J - Fees / Royalty (Others)");
    }
}
