//! CCM binary encoder

use crate::font::CcmFont;
use crate::header::CcmHeader;
use crate::{CCM_MAGIC, GLYPH_RECORD_SIZE, HEADER_SIZE, REGION_SIZE};

/// Serialize a font to CCM bytes
///
/// The output layout is always canonical: counts, offsets and the file size
/// are recomputed from the live glyph list, region slots are rewritten in
/// current glyph order, the texture count is rederived from the glyphs
/// (`max(texture_id) + 1`, or 1 for an empty font), and reserved glyph
/// fields are zeroed. Layout quirks of a previously decoded file do not
/// survive re-encoding.
pub fn encode_ccm(font: &CcmFont) -> Vec<u8> {
    let count = font.glyphs().len();
    let region_offset = HEADER_SIZE;
    let glyph_offset = HEADER_SIZE + count * REGION_SIZE;
    let file_size = glyph_offset + count * GLYPH_RECORD_SIZE;

    let header = CcmHeader {
        format: CCM_MAGIC,
        file_size: file_size as u32,
        font_height: font.font_height,
        texture_width: font.texture_width,
        texture_height: font.texture_height,
        region_count: count as u16,
        glyph_count: count as u16,
        region_offset: region_offset as u32,
        glyph_offset: glyph_offset as u32,
        alignment: font.alignment,
        texture_count: font.derived_texture_count().unwrap_or(1),
    };

    let mut out = Vec::with_capacity(file_size);
    out.extend_from_slice(&header.to_bytes());

    // Region table, one slot per glyph in sequence order
    for glyph in font.glyphs() {
        let region = font.regions()[glyph.region_index()];
        out.extend_from_slice(&region.x1.to_le_bytes());
        out.extend_from_slice(&region.y1.to_le_bytes());
        out.extend_from_slice(&region.x2.to_le_bytes());
        out.extend_from_slice(&region.y2.to_le_bytes());
    }

    // Glyph table, each record referencing the slot written for it above
    for (i, glyph) in font.glyphs().iter().enumerate() {
        out.extend_from_slice(&glyph.code.to_le_bytes());
        out.extend_from_slice(&((region_offset + i * REGION_SIZE) as u32).to_le_bytes());
        out.extend_from_slice(&glyph.texture_id.to_le_bytes());
        out.extend_from_slice(&glyph.prespace.to_le_bytes());
        out.extend_from_slice(&glyph.width.to_le_bytes());
        out.extend_from_slice(&glyph.advance.to_le_bytes());
        out.extend_from_slice(&0i32.to_le_bytes());
        out.extend_from_slice(&0i32.to_le_bytes());
    }

    out
}
