//! Process command - extract data from a single challan file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info};

use challan_core::challan::rules::format_indian;
use challan_core::models::challan::{COLUMNS, Cell, ChallanRecord, ChallanRow};
use challan_core::process_document;

use super::SectionArgs;
use super::config::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input challan PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    #[command(flatten)]
    sections: SectionArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output with the spreadsheet columns
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let input_dir = args
        .input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let parser = super::build_parser(&config, &args.sections, input_dir)?;

    info!("Processing file: {}", args.input.display());
    let record = process_document(&args.input, &parser)?;
    debug!("Extracted {:?}", record);

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_record(record: &ChallanRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &ChallanRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(COLUMNS)?;

    let row = ChallanRow::from(record);
    wtr.write_record(row.cells.iter().map(|cell| match cell {
        Cell::Text(s) => s.clone(),
        Cell::Number(n) => n.to_string(),
        Cell::Empty => String::new(),
    }))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ChallanRecord) -> String {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let mut output = String::new();

    output.push_str(&format!("Challan: {}\n", text(&record.challan_no)));
    output.push_str(&format!("File: {}\n", record.file_name));
    output.push_str(&format!("Tender date: {}\n", text(&record.tender_date)));
    output.push_str(&format!("BSR code: {}\n", text(&record.bsr_code)));
    output.push_str(&format!("Name: {}\n", text(&record.firm_name)));
    output.push_str(&format!("Financial year: {}\n", text(&record.financial_year)));
    output.push_str(&format!("Section: {}\n", record.section));
    output.push('\n');

    output.push_str("Amounts:\n");
    output.push_str(&format!("  Tax:      {}\n", format_indian(record.tax_amount)));
    output.push_str(&format!("  Interest: {}\n", format_indian(record.interest_amount)));
    output.push_str(&format!("  Other:    {}\n", format_indian(record.other_amount)));
    output.push_str(&format!("  Total:    {}\n", format_indian(record.total_amount)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ChallanRecord {
        ChallanRecord {
            file_name: "scan.pdf".to_string(),
            tender_date: Some("15/06/2024".to_string()),
            challan_no: Some("12345".to_string()),
            bsr_code: Some("0510308".to_string()),
            section_raw: "94C".to_string(),
            section: "194C - Works Contract".to_string(),
            financial_year: Some("2024-25".to_string()),
            firm_name: None,
            total_amount: 150000,
            tax_amount: 140000,
            interest_amount: 5000,
            other_amount: 5000,
        }
    }

    #[test]
    fn test_format_csv() {
        let csv = format_csv(&record()).unwrap();
        let mut lines = csv.lines();

        assert!(lines.next().unwrap().starts_with("Date of Challan,Section,Deposited - Tax"));
        assert_eq!(
            lines.next().unwrap(),
            "15/06/2024,194C - Works Contract,140000,5000,0,5000,150000,No,12345,0510308,Self Assessment-200,2024-25,"
        );
    }

    #[test]
    fn test_format_text() {
        let text = format_text(&record());
        assert!(text.contains("Challan: 12345"));
        assert!(text.contains("Name: -"));
        assert!(text.contains("Total:    1,50,000"));
    }

    #[test]
    fn test_format_json() {
        let json = format_record(&record(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_amount"], 150000);
        assert_eq!(value["firm_name"], serde_json::Value::Null);
    }
}
