//! Challan record extraction module.

mod dedupe;
mod parser;
pub mod rules;

pub use dedupe::{Deduplicated, dedupe};
pub use parser::{ChallanParser, key_values};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// The two tables printed on page one of a challan receipt, as text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallanTables {
    /// `Key : Value` lines (depositor, challan and bank details).
    pub key_values: Vec<String>,
    /// Tax breakup rows (`A Tax`, `B Surcharge`, ...).
    pub breakup: Vec<String>,
}
