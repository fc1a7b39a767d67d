//! Error types for the challan-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the challan library.
#[derive(Error, Debug)]
pub enum ChallanError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Challan field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Spreadsheet export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// Source file rename error.
    #[error("rename error: {0}")]
    Rename(#[from] RenameError),

    /// File discovery error.
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to reading a challan document.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// An expected table could not be located on the page.
    #[error("missing table: {0}")]
    MissingTable(&'static str),
}

/// Errors related to challan record extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// An amount field has no digits or does not fit the amount type.
    #[error("malformed amount: {value:?}")]
    MalformedAmount { value: String },

    /// The breakup components do not add up to the stated total.
    #[error(
        "amounts do not reconcile: tax {tax} + interest {interest} + other {other} != total {total}"
    )]
    ReconciliationMismatch {
        total: u64,
        tax: u64,
        interest: u64,
        other: u64,
    },
}

/// Errors related to writing the output spreadsheet.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The xlsx writer rejected a value or failed to save.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// No rows to write.
    #[error("no records to export")]
    Empty,
}

/// Errors related to renaming a processed source file.
#[derive(Error, Debug)]
pub enum RenameError {
    /// A file with the target name already exists.
    #[error("target already exists: {}", path.display())]
    TargetExists { path: PathBuf },

    /// The rename itself failed.
    #[error("failed to rename {} to {}: {source}", from.display(), to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the challan library.
pub type Result<T> = std::result::Result<T, ChallanError>;
