//! Challan record model and its spreadsheet projection.

use serde::{Deserialize, Serialize};

/// One reconciled tax-payment record extracted from a challan PDF.
///
/// Text fields are copied verbatim from the receipt's key-value table and are
/// `None` when the key is absent. Records are only built by the extractor,
/// after `tax_amount + interest_amount + other_amount == total_amount` has
/// been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallanRecord {
    /// Name of the source PDF file.
    pub file_name: String,

    /// Date the payment was tendered.
    pub tender_date: Option<String>,

    /// Challan serial number.
    pub challan_no: Option<String>,

    /// Bank branch (BSR) code.
    pub bsr_code: Option<String>,

    /// Nature of payment code exactly as printed, e.g. `94C`.
    pub section_raw: String,

    /// Human readable section label.
    pub section: String,

    /// Financial year, e.g. `2024-25`.
    pub financial_year: Option<String>,

    /// Depositor name.
    pub firm_name: Option<String>,

    /// Stated total amount.
    pub total_amount: u64,

    /// Tax component (breakup row A).
    pub tax_amount: u64,

    /// Interest component (breakup row D).
    pub interest_amount: u64,

    /// Surcharge, cess, penalty and 234E fee (rows B, C, E, F).
    pub other_amount: u64,
}

impl ChallanRecord {
    /// File name this record's source PDF is renamed to.
    pub fn target_file_name(&self) -> String {
        format!(
            "{} {} {}.pdf",
            self.section_raw,
            crate::challan::rules::format_indian(self.total_amount),
            self.challan_no.as_deref().unwrap_or_default()
        )
    }
}

/// Fee column value; fees are never read from the receipt.
pub const FEE_AMOUNT: u64 = 0;

/// Book entry column value.
pub const BOOK_ENTRY: &str = "No";

/// Type of payment column value.
pub const SA_ENTRY: &str = "Self Assessment-200";

/// Spreadsheet header labels, in column order.
pub const COLUMNS: [&str; 13] = [
    "Date of Challan",
    "Section",
    "Deposited - Tax",
    "Interest",
    "Fee",
    "Other Amount",
    "Total Amount Deposited",
    "Book - Entry ?",
    "Challan Serial No.",
    "Bank Branch Code",
    "Type of Payment",
    "Financial Year",
    "Name",
];

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(u64),
    Empty,
}

impl Cell {
    fn text(value: &Option<String>) -> Self {
        value.clone().map(Cell::Text).unwrap_or(Cell::Empty)
    }

    /// Rendered width used for column fitting.
    pub fn display_len(&self) -> usize {
        match self {
            Cell::Text(s) => s.chars().count(),
            Cell::Number(n) => n.to_string().len(),
            Cell::Empty => 0,
        }
    }
}

/// A record projected onto the spreadsheet columns, filler values included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallanRow {
    pub cells: [Cell; 13],
}

impl From<&ChallanRecord> for ChallanRow {
    fn from(record: &ChallanRecord) -> Self {
        Self {
            cells: [
                Cell::text(&record.tender_date),
                Cell::Text(record.section.clone()),
                Cell::Number(record.tax_amount),
                Cell::Number(record.interest_amount),
                Cell::Number(FEE_AMOUNT),
                Cell::Number(record.other_amount),
                Cell::Number(record.total_amount),
                Cell::Text(BOOK_ENTRY.to_string()),
                Cell::text(&record.challan_no),
                Cell::text(&record.bsr_code),
                Cell::Text(SA_ENTRY.to_string()),
                Cell::text(&record.financial_year),
                Cell::text(&record.firm_name),
            ],
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_record(file_name: &str, challan_no: &str) -> ChallanRecord {
    ChallanRecord {
        file_name: file_name.to_string(),
        tender_date: Some("15/06/2024".to_string()),
        challan_no: Some(challan_no.to_string()),
        bsr_code: Some("0510308".to_string()),
        section_raw: "94C".to_string(),
        section: "194C - Works Contract".to_string(),
        financial_year: Some("2024-25".to_string()),
        firm_name: Some("ACME BUILDERS".to_string()),
        total_amount: 1000,
        tax_amount: 900,
        interest_amount: 50,
        other_amount: 50,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_projection_applies_fillers() {
        let record = sample_record("a.pdf", "12345");
        let row = ChallanRow::from(&record);

        assert_eq!(row.cells[0], Cell::Text("15/06/2024".to_string()));
        assert_eq!(row.cells[1], Cell::Text("194C - Works Contract".to_string()));
        assert_eq!(row.cells[2], Cell::Number(900));
        assert_eq!(row.cells[3], Cell::Number(50));
        assert_eq!(row.cells[4], Cell::Number(0));
        assert_eq!(row.cells[5], Cell::Number(50));
        assert_eq!(row.cells[6], Cell::Number(1000));
        assert_eq!(row.cells[7], Cell::Text("No".to_string()));
        assert_eq!(row.cells[8], Cell::Text("12345".to_string()));
        assert_eq!(row.cells[10], Cell::Text("Self Assessment-200".to_string()));
    }

    #[test]
    fn test_missing_fields_project_to_empty() {
        let mut record = sample_record("a.pdf", "1");
        record.firm_name = None;
        record.bsr_code = None;

        let row = ChallanRow::from(&record);
        assert_eq!(row.cells[9], Cell::Empty);
        assert_eq!(row.cells[12], Cell::Empty);
    }

    #[test]
    fn test_target_file_name() {
        let mut record = sample_record("a.pdf", "00042");
        record.total_amount = 1234567;
        assert_eq!(record.target_file_name(), "94C 12,34,567 00042.pdf");

        record.challan_no = None;
        record.total_amount = 100;
        assert_eq!(record.target_file_name(), "94C 100 .pdf");
    }
}
