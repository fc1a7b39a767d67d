//! Spreadsheet export and source file renaming.

mod rename;
mod xlsx;

pub use rename::RenamePlan;
pub use xlsx::{column_widths, write_workbook};
