//! ccm - CCM bitmap font inspection and conversion tool
//!
//! # Commands
//!
//! - `ccm info` - Print the decoded header of a CCM file
//! - `ccm dump` - Hex dump of the raw file bytes
//! - `ccm export` - Convert a CCM file to a glyph text listing
//! - `ccm import` - Build a CCM file from a glyph text listing
//! - `ccm textures` - List atlas images resolved next to a CCM file
//!
//! # Usage
//!
//! ```bash
//! # Inspect a font
//! ccm info menu_font.ccm
//!
//! # Edit glyphs as text, then rebuild
//! ccm export menu_font.ccm -o glyphs.txt
//! ccm import glyphs.txt --base menu_font.ccm -o menu_font.ccm
//! ```

mod dump;
mod export;
mod import;
mod info;
mod textures;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// CCM bitmap font inspection and conversion tool
#[derive(Parser)]
#[command(name = "ccm")]
#[command(about = "CCM bitmap font inspection and conversion tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the decoded header of a CCM file
    Info(info::InfoArgs),

    /// Hex dump of the raw file bytes
    Dump(dump::DumpArgs),

    /// Convert a CCM file to a glyph text listing
    Export(export::ExportArgs),

    /// Build a CCM file from a glyph text listing
    Import(import::ImportArgs),

    /// List atlas images resolved next to a CCM file
    Textures(textures::TexturesArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info(args) => info::execute(args),
        Commands::Dump(args) => dump::execute(args),
        Commands::Export(args) => export::execute(args),
        Commands::Import(args) => import::execute(args),
        Commands::Textures(args) => textures::execute(args),
    }
}
