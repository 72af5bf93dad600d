//! File-level convenience wrappers
//!
//! Thin path-based layers over the byte/string codecs. Files are read and
//! written whole; no handle survives past the call.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::decode::parse_ccm;
use crate::encode::encode_ccm;
use crate::error::CcmError;
use crate::font::CcmFont;
use crate::text::{TextImport, export_text, import_text};

/// Load and parse a CCM file
pub fn read_ccm_file(path: &Path) -> Result<CcmFont, CcmError> {
    let data = fs::read(path)?;
    let font = parse_ccm(&data)?;
    info!(
        "loaded CCM font from {} ({} glyphs)",
        path.display(),
        font.glyphs().len()
    );
    Ok(font)
}

/// Encode and write a CCM file
pub fn write_ccm_file(path: &Path, font: &CcmFont) -> Result<(), CcmError> {
    let data = encode_ccm(font);
    fs::write(path, &data)?;
    info!("wrote CCM font to {} ({} bytes)", path.display(), data.len());
    Ok(())
}

/// Write the glyph text listing for `font`
pub fn export_text_file(path: &Path, font: &CcmFont) -> Result<(), CcmError> {
    fs::write(path, export_text(font))?;
    Ok(())
}

/// Import a glyph text listing into `font`
///
/// See [`import_text`] for the grammar; `font` is untouched when an error
/// is returned.
pub fn import_text_file(path: &Path, font: &mut CcmFont) -> Result<TextImport, CcmError> {
    let text = fs::read_to_string(path)?;
    import_text(font, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::TexRegion;

    fn sample_font() -> CcmFont {
        let mut font = CcmFont::new();
        font.font_height = 24;
        font.texture_count = 2;
        font.add_glyph(65, 1, 0, 12, 14, TexRegion::new(0, 0, 12, 24))
            .unwrap();
        font
    }

    #[test]
    fn binary_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ccm");

        let font = sample_font();
        write_ccm_file(&path, &font).unwrap();
        let loaded = read_ccm_file(&path).unwrap();

        assert_eq!(loaded.font_height, 24);
        assert_eq!(loaded.glyphs().len(), 1);
        assert_eq!(loaded.glyphs()[0].code, 65);
        assert_eq!(
            loaded.region_of(&loaded.glyphs()[0]),
            Some(TexRegion::new(0, 0, 12, 24))
        );
    }

    #[test]
    fn text_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glyphs.txt");

        let font = sample_font();
        export_text_file(&path, &font).unwrap();

        let mut imported = CcmFont::new();
        let stats = import_text_file(&path, &mut imported).unwrap();
        assert_eq!(stats.imported, 1);
        assert_eq!(stats.skipped, 0);
        assert_eq!(imported.glyphs()[0].texture_id, 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.ccm");
        assert!(matches!(read_ccm_file(&path), Err(CcmError::Io(_))));
    }
}
