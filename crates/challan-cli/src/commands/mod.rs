pub mod batch;
pub mod config;
pub mod process;

use std::path::{Path, PathBuf};

use anyhow::Context;

use challan_core::challan::ChallanParser;
use challan_core::challan::rules::{OverrideMode, SectionMap};
use challan_core::models::config::ChallanConfig;

/// Section map options shared by the extraction commands.
#[derive(clap::Args)]
pub struct SectionArgs {
    /// Section map file (default: the configured name in the input directory)
    #[arg(long)]
    section_map: Option<PathBuf>,

    /// Lay section map entries over the built-in codes instead of replacing them
    #[arg(long)]
    merge_sections: bool,
}

/// Build a parser from the config and the section options.
pub fn build_parser(
    config: &ChallanConfig,
    sections: &SectionArgs,
    input_dir: &Path,
) -> anyhow::Result<ChallanParser> {
    let map_path = sections
        .section_map
        .clone()
        .unwrap_or_else(|| input_dir.join(&config.sections.map_file));

    let mode = if sections.merge_sections {
        OverrideMode::Merge
    } else {
        config.sections.override_mode
    };

    let map = SectionMap::load(&map_path, mode)
        .with_context(|| format!("Failed to read section map {}", map_path.display()))?;

    Ok(ChallanParser::new()
        .with_sections(map)
        .with_amount_policy(config.extraction.amount_policy))
}
