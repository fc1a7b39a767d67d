//! Per-document processing and file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, glob_with};
use tracing::{debug, warn};

use crate::challan::ChallanParser;
use crate::error::Result;
use crate::models::challan::ChallanRecord;
use crate::pdf::{PdfExtractor, PdfProcessor, locate_tables};

/// PDF files directly inside `dir`, sorted by name. The extension match is
/// case-insensitive.
pub fn discover_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.pdf", Pattern::escape(&dir.to_string_lossy()));
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    let files: Vec<PathBuf> = glob_with(&pattern, options)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable entry {}: {}", e.path().display(), e.error());
                None
            }
        })
        .filter(|p| p.is_file())
        .collect();

    debug!("Found {} PDF files in {}", files.len(), dir.display());
    Ok(files)
}

/// Read page one of a challan PDF and extract its record.
///
/// The document is dropped before returning, whatever the outcome.
pub fn process_document(path: &Path, parser: &ChallanParser) -> Result<ChallanRecord> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let data = fs::read(path)?;
    let page_text = PdfExtractor::from_bytes(&data)?.extract_page_text(1)?;
    let tables = locate_tables(&page_text)?;

    Ok(parser.extract(&file_name, &tables)?)
}
