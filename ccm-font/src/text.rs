//! Human-readable glyph listing export/import
//!
//! The listing is a small header block followed by one line per glyph:
//!
//! ```text
//! Height: 24
//! TextureWidth: 256
//! TextureHeight: 128
//! NumTextures: 2
//! NumGlyphs: 1
//!
//! code=65, textureId=0, prespace=1, width=12, advance=14, top=(0, 0), bottom=(12, 24)
//! ```
//!
//! Coordinate pairs go through a strict `"(" int "," int ")"` parser; no
//! expression evaluation of any kind.

use tracing::warn;

use crate::error::CcmError;
use crate::font::{CcmFont, Glyph, TexRegion};

/// Outcome of a successful text import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextImport {
    /// Glyph lines committed to the font
    pub imported: usize,
    /// Glyph lines skipped for an out-of-range texture id
    pub skipped: usize,
}

/// Render the font as a glyph text listing
pub fn export_text(font: &CcmFont) -> String {
    let mut out = String::new();
    out.push_str(&format!("Height: {}\n", font.font_height));
    out.push_str(&format!("TextureWidth: {}\n", font.texture_width));
    out.push_str(&format!("TextureHeight: {}\n", font.texture_height));
    out.push_str(&format!("NumTextures: {}\n", font.texture_count));
    out.push_str(&format!("NumGlyphs: {}\n\n", font.glyphs().len()));

    for glyph in font.glyphs() {
        let region = font.regions()[glyph.region_index()];
        out.push_str(&format!(
            "code={}, textureId={}, prespace={}, width={}, advance={}, top=({}, {}), bottom=({}, {})\n",
            glyph.code,
            glyph.texture_id,
            glyph.prespace,
            glyph.width,
            glyph.advance,
            region.x1,
            region.y1,
            region.x2,
            region.y2,
        ));
    }
    out
}

/// Parse a glyph text listing into `font`
///
/// Everything is staged into fresh state and swapped in only once the whole
/// listing has been accepted; on error the font is left exactly as it was.
///
/// Header lines are matched by prefix and update the staged font fields.
/// Non-empty lines that are neither header lines nor glyph lines are
/// ignored. A glyph line whose texture id is out of range for the staged
/// texture count is skipped with a warning; any other malformed line aborts
/// the import with [`CcmError::MalformedLine`].
pub fn import_text(font: &mut CcmFont, text: &str) -> Result<TextImport, CcmError> {
    let mut staged = Staged {
        font_height: font.font_height,
        texture_width: font.texture_width,
        texture_height: font.texture_height,
        texture_count: font.texture_count,
        regions: Vec::new(),
        glyphs: Vec::new(),
        skipped: 0,
    };

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = line_no + 1;
        if let Some(value) = line.strip_prefix("Height:") {
            staged.font_height = header_value(value, line_no)?;
        } else if let Some(value) = line.strip_prefix("TextureWidth:") {
            staged.texture_width = header_value(value, line_no)?;
        } else if let Some(value) = line.strip_prefix("TextureHeight:") {
            staged.texture_height = header_value(value, line_no)?;
        } else if let Some(value) = line.strip_prefix("NumTextures:") {
            staged.texture_count = header_value(value, line_no)?;
        } else if let Some(value) = line.strip_prefix("NumGlyphs:") {
            // redundant with the glyph lines themselves; parsed, not stored
            let _: u16 = header_value(value, line_no)?;
        } else if line.starts_with("code=") {
            parse_glyph_line(line, line_no, &mut staged)?;
        }
    }

    let imported = staged.glyphs.len();
    font.font_height = staged.font_height;
    font.texture_width = staged.texture_width;
    font.texture_height = staged.texture_height;
    font.texture_count = staged.texture_count;
    font.regions = staged.regions;
    font.glyphs = staged.glyphs;
    Ok(TextImport {
        imported,
        skipped: staged.skipped,
    })
}

struct Staged {
    font_height: u16,
    texture_width: u16,
    texture_height: u16,
    texture_count: u16,
    regions: Vec<TexRegion>,
    glyphs: Vec<Glyph>,
    skipped: usize,
}

fn header_value<T: std::str::FromStr>(value: &str, line: usize) -> Result<T, CcmError> {
    value.trim().parse().map_err(|_| CcmError::MalformedLine {
        line,
        reason: format!("expected an integer, got {:?}", value.trim()),
    })
}

fn parse_glyph_line(line: &str, line_no: usize, staged: &mut Staged) -> Result<(), CcmError> {
    let malformed = |reason: String| CcmError::MalformedLine {
        line: line_no,
        reason,
    };

    let (scalars, rest) = line
        .split_once(", top=")
        .ok_or_else(|| malformed("missing top= coordinate pair".to_string()))?;
    let (top, bottom) = rest
        .split_once(", bottom=")
        .ok_or_else(|| malformed("missing bottom= coordinate pair".to_string()))?;

    let fields: Vec<&str> = scalars.split(", ").collect();
    if fields.len() != 5 {
        return Err(malformed(format!(
            "expected 5 scalar fields before top=, got {}",
            fields.len()
        )));
    }
    let code: u32 = field_value(fields[0], line_no)?;
    let texture_id: i16 = field_value(fields[1], line_no)?;
    let prespace: i16 = field_value(fields[2], line_no)?;
    let width: i16 = field_value(fields[3], line_no)?;
    let advance: i16 = field_value(fields[4], line_no)?;

    let (x1, y1) =
        parse_point(top).ok_or_else(|| malformed(format!("bad coordinate pair {top:?}")))?;
    let (x2, y2) =
        parse_point(bottom).ok_or_else(|| malformed(format!("bad coordinate pair {bottom:?}")))?;

    if i32::from(texture_id) >= i32::from(staged.texture_count) {
        warn!(
            "skipping glyph {}: texture id {} out of range (font has {})",
            code, texture_id, staged.texture_count
        );
        staged.skipped += 1;
        return Ok(());
    }

    staged.regions.push(TexRegion::new(x1, y1, x2, y2));
    staged.glyphs.push(Glyph {
        code,
        texture_id,
        prespace,
        width,
        advance,
        region: staged.regions.len() - 1,
    });
    Ok(())
}

fn field_value<T: std::str::FromStr>(field: &str, line: usize) -> Result<T, CcmError> {
    let (_, value) = field.split_once('=').ok_or_else(|| CcmError::MalformedLine {
        line,
        reason: format!("field {field:?} has no value"),
    })?;
    value.trim().parse().map_err(|_| CcmError::MalformedLine {
        line,
        reason: format!("bad integer {value:?} in {field:?}"),
    })
}

/// Strict `(x, y)` coordinate pair parser
///
/// Grammar: `"(" int "," int ")"` with optional whitespace around the
/// integers. Anything else is rejected.
pub(crate) fn parse_point(s: &str) -> Option<(i16, i16)> {
    let inner = s.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (x, y) = inner.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}
