//! Export command - CCM file to glyph text listing

use std::path::PathBuf;

use anyhow::{Context, Result};
use ccm_font::{export_text_file, read_ccm_file};
use clap::Args;

/// Arguments for the export command
#[derive(Args)]
pub struct ExportArgs {
    /// Input CCM file
    pub input: PathBuf,

    /// Output text file (default: input path with .txt extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the export command
pub fn execute(args: ExportArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("txt"));

    let font = read_ccm_file(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    export_text_file(&output, &font)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!("exported {} glyphs to {}", font.glyphs().len(), output.display());
    Ok(())
}
