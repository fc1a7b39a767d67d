//! Spreadsheet output using rust_xlsxwriter.

use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use tracing::debug;

use crate::error::ExportError;
use crate::models::challan::{COLUMNS, Cell, ChallanRecord, ChallanRow};

/// Column widths: the longest cell in each column, header included, plus
/// `margin` characters.
pub fn column_widths(rows: &[ChallanRow], margin: usize) -> [usize; COLUMNS.len()] {
    let mut widths = COLUMNS.map(|header| header.chars().count());

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
            *width = (*width).max(cell.display_len());
        }
    }

    widths.map(|w| w + margin)
}

/// Write one sheet with a formatted header row and one row per record.
pub fn write_workbook(
    path: &Path,
    records: &[ChallanRecord],
    margin: usize,
) -> Result<(), ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }

    let rows: Vec<ChallanRow> = records.iter().map(ChallanRow::from).collect();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_text_wrap();

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let row_num = (row_idx + 1) as u32;
        for (col, cell) in row.cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row_num, col, text)?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(row_num, col, *n as f64)?;
                }
                Cell::Empty => {}
            }
        }
    }

    for (col, width) in column_widths(&rows, margin).iter().enumerate() {
        worksheet.set_column_width(col as u16, *width as f64)?;
    }

    workbook.save(path)?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::challan::sample_record;
    use calamine::{Reader, Xlsx, open_workbook};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_widths_fit_longest_cell() {
        let mut record = sample_record("a.pdf", "12345");
        record.firm_name = Some("A VERY LONG DEPOSITOR NAME PRIVATE LIMITED".to_string());
        let rows = vec![ChallanRow::from(&record)];

        let widths = column_widths(&rows, 2);

        // "Date of Challan" is longer than "15/06/2024"
        assert_eq!(widths[0], "Date of Challan".len() + 2);
        // "194C - Works Contract" is longer than "Section"
        assert_eq!(widths[1], "194C - Works Contract".len() + 2);
        assert_eq!(widths[12], record.firm_name.unwrap().len() + 2);
        assert_eq!(widths[4], "Fee".len() + 2);
    }

    #[test]
    fn test_write_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let records = vec![sample_record("a.pdf", "1"), sample_record("b.pdf", "2")];

        write_workbook(&path, &records, 2).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], COLUMNS.map(String::from).to_vec());
        assert_eq!(rows[1][2], "900");
        assert_eq!(rows[1][4], "0");
        assert_eq!(rows[1][6], "1000");
        assert_eq!(rows[1][8], "1");
        assert_eq!(rows[2][8], "2");
        assert_eq!(rows[2][10], "Self Assessment-200");
    }

    #[test]
    fn test_write_workbook_rejects_empty() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_workbook(&dir.path().join("out.xlsx"), &[], 2);
        assert!(matches!(result, Err(ExportError::Empty)));
    }
}
