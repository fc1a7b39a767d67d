//! Locates the two challan tables in page text.

use tracing::trace;

use crate::challan::ChallanTables;
use crate::challan::rules::classify;
use crate::error::PdfError;

/// Heading printed above the tax breakup table (matched case-insensitively).
pub const BREAKUP_HEADING: &str = "tax breakup";

/// Split page-one text into the key-value table and the tax breakup table.
///
/// Lines before the breakup heading form the key-value table, lines after it
/// the breakup table. Without a heading the breakup starts at the first line
/// carrying a breakup label. Blank lines are dropped.
pub fn locate_tables(page_text: &str) -> Result<ChallanTables, PdfError> {
    let lines: Vec<&str> = page_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let (details, breakup) = if let Some(heading) = lines
        .iter()
        .position(|line| line.to_lowercase().contains(BREAKUP_HEADING))
    {
        (&lines[..heading], &lines[heading + 1..])
    } else if let Some(first_row) = lines.iter().position(|line| classify(line).is_some()) {
        lines.split_at(first_row)
    } else {
        return Err(PdfError::MissingTable("tax breakup"));
    };

    if !details.iter().any(|line| line.contains(':')) {
        return Err(PdfError::MissingTable("challan details"));
    }

    trace!(
        "Located {} detail lines and {} breakup lines",
        details.len(),
        breakup.len()
    );

    Ok(ChallanTables {
        key_values: details.iter().map(|s| s.to_string()).collect(),
        breakup: breakup.iter().map(|s| s.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = "
        Challan Receipt
        ITNS No. : 281
        Name : ACME BUILDERS

        Amount (in Rs.) : ₹ 1,000
        Challan No : 12345
        Tax Breakup Details (Amount In ₹)
        A Tax ₹ 900
        D Interest ₹ 100
        Total (A+B+C+D+E+F) ₹ 1,000
    ";

    #[test]
    fn test_split_at_heading() {
        let tables = locate_tables(PAGE).unwrap();

        assert_eq!(
            tables.key_values,
            vec![
                "Challan Receipt",
                "ITNS No. : 281",
                "Name : ACME BUILDERS",
                "Amount (in Rs.) : ₹ 1,000",
                "Challan No : 12345",
            ]
        );
        assert_eq!(
            tables.breakup,
            vec!["A Tax ₹ 900", "D Interest ₹ 100", "Total (A+B+C+D+E+F) ₹ 1,000"]
        );
    }

    #[test]
    fn test_split_at_first_row_without_heading() {
        let text = "Amount (in Rs.) : 100\nA Tax 100\nB Surcharge 0";
        let tables = locate_tables(text).unwrap();

        assert_eq!(tables.key_values, vec!["Amount (in Rs.) : 100"]);
        assert_eq!(tables.breakup, vec!["A Tax 100", "B Surcharge 0"]);
    }

    #[test]
    fn test_missing_breakup() {
        assert!(matches!(
            locate_tables("Challan No : 1\nName : X"),
            Err(PdfError::MissingTable("tax breakup"))
        ));
    }

    #[test]
    fn test_missing_details() {
        assert!(matches!(
            locate_tables("Tax Breakup\nA Tax 100"),
            Err(PdfError::MissingTable("challan details"))
        ));
    }
}
