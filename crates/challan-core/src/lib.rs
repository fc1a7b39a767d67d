//! Core library for tax challan processing.
//!
//! This crate provides:
//! - PDF page text extraction and challan table location
//! - Challan record extraction with amount reconciliation
//! - Section code mapping and Indian digit grouping
//! - Duplicate removal, spreadsheet export and source file renaming

pub mod challan;
pub mod error;
pub mod export;
pub mod models;
pub mod pdf;
pub mod pipeline;

pub use challan::{ChallanParser, ChallanTables, Deduplicated, dedupe};
pub use error::{ChallanError, ExportError, ExtractionError, PdfError, RenameError, Result};
pub use export::{RenamePlan, write_workbook};
pub use models::challan::{ChallanRecord, ChallanRow};
pub use models::config::ChallanConfig;
pub use pdf::{PdfExtractor, PdfProcessor};
pub use pipeline::{discover_pdfs, process_document};
