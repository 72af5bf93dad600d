//! Info command - decoded header summary for a CCM file

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ccm_font::{CcmHeader, parse_ccm};
use clap::Args;

/// Arguments for the info command
#[derive(Args)]
pub struct InfoArgs {
    /// CCM file to inspect
    pub input: PathBuf,
}

/// Execute the info command
pub fn execute(args: InfoArgs) -> Result<()> {
    let data = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let header = CcmHeader::from_bytes(&data).context("file too small for CCM header")?;
    let font = parse_ccm(&data)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    println!("File:           {}", args.input.display());
    println!("Format:         0x{:x}", header.format);
    println!("File size:      {} (actual {})", header.file_size, data.len());
    println!("Font height:    {}", header.font_height);
    println!(
        "Texture size:   {}x{}",
        header.texture_width, header.texture_height
    );
    println!("Region count:   {}", header.region_count);
    println!("Glyph count:    {}", header.glyph_count);
    println!("Region offset:  {}", header.region_offset);
    println!("Glyph offset:   {}", header.glyph_offset);
    println!("Alignment:      {}", header.alignment);
    println!(
        "Texture count:  {} (declared {})",
        font.texture_count, header.texture_count
    );
    Ok(())
}
