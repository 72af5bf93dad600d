//! Textures command - resolve atlas images next to a CCM file
//!
//! CCM files do not embed image paths; atlas textures live next to the font
//! by naming convention: `<base>_<id>.<ext>` or `<base>_<4-digit-id>.<ext>`
//! for png/dds, with a bare `<base>.<ext>` counting as texture 0.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ccm_font::read_ccm_file;
use clap::Args;

const TEXTURE_EXTENSIONS: [&str; 2] = ["png", "dds"];

/// Arguments for the textures command
#[derive(Args)]
pub struct TexturesArgs {
    /// CCM file whose atlas images to resolve
    pub input: PathBuf,
}

/// Execute the textures command
pub fn execute(args: TexturesArgs) -> Result<()> {
    let font = read_ccm_file(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let found = find_texture_files(&args.input, font.texture_count);
    if found.is_empty() {
        println!(
            "no atlas images found next to {} (expected {})",
            args.input.display(),
            font.texture_count
        );
        return Ok(());
    }

    for (id, path) in &found {
        println!("{id:4}  {}", path.display());
    }
    if found.len() < font.texture_count as usize {
        println!(
            "({} of {} textures resolved)",
            found.len(),
            font.texture_count
        );
    }
    Ok(())
}

/// Resolve atlas image files for `ccm_path` by naming convention
fn find_texture_files(ccm_path: &Path, texture_count: u16) -> Vec<(u16, PathBuf)> {
    let base = ccm_path.with_extension("");
    let mut found = Vec::new();
    for id in 0..texture_count {
        let mut hit = None;
        'search: for ext in TEXTURE_EXTENSIONS {
            for name in [
                format!("{}_{}.{}", base.display(), id, ext),
                format!("{}_{:04}.{}", base.display(), id, ext),
            ] {
                let candidate = PathBuf::from(name);
                if candidate.exists() {
                    hit = Some(candidate);
                    break 'search;
                }
            }
        }
        // a bare <base>.<ext> next to the font counts as texture 0
        if hit.is_none() && id == 0 {
            for ext in TEXTURE_EXTENSIONS {
                let candidate = base.with_extension(ext);
                if candidate.exists() {
                    hit = Some(candidate);
                    break;
                }
            }
        }
        if let Some(path) = hit {
            found.push((id, path));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_numbered_textures() {
        let dir = tempfile::tempdir().unwrap();
        let ccm = dir.path().join("font.ccm");
        fs::write(dir.path().join("font_0.png"), b"x").unwrap();
        fs::write(dir.path().join("font_0001.dds"), b"x").unwrap();

        let found = find_texture_files(&ccm, 3);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].0, 0);
        assert!(found[0].1.ends_with("font_0.png"));
        assert_eq!(found[1].0, 1);
        assert!(found[1].1.ends_with("font_0001.dds"));
    }

    #[test]
    fn bare_basename_counts_as_texture_zero() {
        let dir = tempfile::tempdir().unwrap();
        let ccm = dir.path().join("font.ccm");
        fs::write(dir.path().join("font.png"), b"x").unwrap();

        let found = find_texture_files(&ccm, 1);
        assert_eq!(found, vec![(0, dir.path().join("font.png"))]);
    }

    #[test]
    fn nothing_found_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ccm = dir.path().join("font.ccm");
        assert!(find_texture_files(&ccm, 2).is_empty());
    }
}
