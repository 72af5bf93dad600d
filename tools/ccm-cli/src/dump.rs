//! Dump command - raw byte hex dump

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use ccm_font::hex_dump;
use clap::Args;

/// Arguments for the dump command
#[derive(Args)]
pub struct DumpArgs {
    /// File to dump
    pub input: PathBuf,

    /// Write the dump to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the dump command
pub fn execute(args: DumpArgs) -> Result<()> {
    let data = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    if data.is_empty() {
        bail!("no data: {} is empty", args.input.display());
    }

    match args.output {
        Some(path) => {
            let text = hex_dump(&data).collect::<Vec<_>>().join("\n");
            fs::write(&path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("wrote dump of {} bytes to {}", data.len(), path.display());
        }
        None => {
            for line in hex_dump(&data) {
                println!("{line}");
            }
        }
    }
    Ok(())
}
