//! Batch command - extract every challan in a directory, export and rename.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use challan_core::error::{ChallanError, ExtractionError};
use challan_core::export::{RenamePlan, write_workbook};
use challan_core::models::challan::ChallanRecord;
use challan_core::{dedupe, discover_pdfs, process_document};

use super::SectionArgs;
use super::config::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing challan PDFs
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Directory for the spreadsheet (default: the input directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    #[command(flatten)]
    sections: SectionArgs,

    /// Leave source files under their original names
    #[arg(long)]
    no_rename: bool,

    /// Print planned renames without renaming anything
    #[arg(long)]
    dry_run: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,
}

/// Outcome counters for the final summary.
#[derive(Debug, Default)]
struct BatchSummary {
    found: usize,
    extracted: usize,
    rejected: Vec<(PathBuf, String)>,
    duplicates: usize,
    renamed: usize,
    rename_failures: usize,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let result = run_batch(&args, config_path);

    if args.pause {
        print!("Press Enter to exit...");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }

    result
}

fn run_batch(args: &BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let parser = super::build_parser(&config, &args.sections, &args.dir)?;

    let files = discover_pdfs(&args.dir)
        .with_context(|| format!("Failed to list {}", args.dir.display()))?;

    let mut summary = BatchSummary {
        found: files.len(),
        ..Default::default()
    };

    println!(
        "{} Found {} challan files in {}",
        style("ℹ").blue(),
        files.len(),
        args.dir.display()
    );

    let records = extract_all(&files, &parser, &mut summary);

    let deduped = dedupe(&records);
    for duplicate in &deduped.duplicates {
        println!(
            "{} Duplicate found: {}, removing challan from list",
            style("!").yellow(),
            duplicate.file_name
        );
    }
    summary.duplicates = deduped.duplicates.len();

    if deduped.unique.is_empty() {
        println!("{} No challans found in folder", style("ℹ").blue());
        print_summary(&summary, start);
        return Ok(());
    }

    let output_dir = args.output_dir.as_deref().unwrap_or(&args.dir);
    fs::create_dir_all(output_dir)?;
    let workbook_path =
        output_dir.join(config.workbook_name(chrono::Local::now().naive_local()));

    println!("{} Saving details to spreadsheet...", style("ℹ").blue());
    write_workbook(&workbook_path, &deduped.unique, config.output.column_margin)
        .with_context(|| format!("Failed to write {}", workbook_path.display()))?;
    println!(
        "{} Spreadsheet written to {}",
        style("✓").green(),
        workbook_path.display()
    );

    if args.no_rename || !config.output.rename_files {
        debug!("Renaming disabled");
    } else {
        rename_all(&args.dir, &deduped.unique, args.dry_run, &mut summary);
    }

    print_summary(&summary, start);
    Ok(())
}

fn progress_bar(len: usize, template: &str) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(template)
            .unwrap()
            .progress_chars("=>-"),
    );
    pb
}

/// Print above the progress bar, also when the bar is hidden.
fn report(pb: &ProgressBar, message: String) {
    pb.suspend(|| println!("{}", message));
}

fn extract_all(
    files: &[PathBuf],
    parser: &challan_core::ChallanParser,
    summary: &mut BatchSummary,
) -> Vec<ChallanRecord> {
    let pb = progress_bar(
        files.len(),
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} challans extracted",
    );

    let mut records = Vec::with_capacity(files.len());

    for path in files {
        let name = file_name(path);

        match process_document(path, parser) {
            Ok(record) => {
                debug!("Extracted challan {:?} from {}", record.challan_no, name);
                records.push(record);
            }
            Err(ChallanError::Extraction(e @ ExtractionError::ReconciliationMismatch { .. })) => {
                warn!("{}: {}", name, e);
                report(
                    &pb,
                    format!(
                        "{} Error extracting data from challan file {}",
                        style("✗").red(),
                        name
                    ),
                );
                summary.rejected.push((path.clone(), e.to_string()));
            }
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                report(
                    &pb,
                    format!(
                        "{} An error occurred while processing {}: {}",
                        style("✗").red(),
                        name,
                        e
                    ),
                );
                summary.rejected.push((path.clone(), e.to_string()));
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");
    summary.extracted = records.len();
    records
}

fn rename_all(dir: &Path, records: &[ChallanRecord], dry_run: bool, summary: &mut BatchSummary) {
    let pb = progress_bar(
        records.len(),
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files renamed",
    );

    for record in records {
        let plan = RenamePlan::for_record(dir, record);

        if dry_run {
            report(
                &pb,
                format!(
                    "  {} -> {}",
                    record.file_name,
                    file_name(&plan.to)
                ),
            );
        } else {
            match plan.execute() {
                Ok(()) => summary.renamed += 1,
                Err(e) => {
                    warn!("{}", e);
                    report(
                        &pb,
                        format!(
                            "{} Error renaming {}: {}",
                            style("✗").red(),
                            record.file_name,
                            e
                        ),
                    );
                    summary.rename_failures += 1;
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");
}

fn print_summary(summary: &BatchSummary, start: Instant) {
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        summary.found,
        start.elapsed()
    );
    println!(
        "   {} extracted, {} rejected, {} duplicates, {} renamed",
        style(summary.extracted).green(),
        style(summary.rejected.len()).red(),
        style(summary.duplicates).yellow(),
        style(summary.renamed).green()
    );

    if summary.rename_failures > 0 {
        println!(
            "   {} files could not be renamed",
            style(summary.rename_failures).red()
        );
    }

    if !summary.rejected.is_empty() {
        println!();
        println!("{}", style("Rejected files:").red());
        for (path, error) in &summary.rejected {
            println!("  - {}: {}", path.display(), error);
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
