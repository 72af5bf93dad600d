//! Import command - glyph text listing to CCM file

use std::path::PathBuf;

use anyhow::{Context, Result};
use ccm_font::{CcmFont, import_text_file, read_ccm_file, write_ccm_file};
use clap::Args;

/// Arguments for the import command
#[derive(Args)]
pub struct ImportArgs {
    /// Input glyph text listing
    pub input: PathBuf,

    /// Start from an existing CCM file instead of an empty font
    #[arg(short, long)]
    pub base: Option<PathBuf>,

    /// Output CCM file
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Execute the import command
pub fn execute(args: ImportArgs) -> Result<()> {
    let mut font = match &args.base {
        Some(path) => read_ccm_file(path)
            .with_context(|| format!("failed to load base font {}", path.display()))?,
        None => CcmFont::new(),
    };

    let stats = import_text_file(&args.input, &mut font)
        .with_context(|| format!("failed to import {}", args.input.display()))?;
    if stats.skipped > 0 {
        tracing::warn!(
            "skipped {} glyph lines with out-of-range texture ids",
            stats.skipped
        );
    }

    write_ccm_file(&args.output, &font)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!(
        "imported {} glyphs into {}",
        stats.imported,
        args.output.display()
    );
    Ok(())
}
